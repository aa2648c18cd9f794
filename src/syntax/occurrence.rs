//! A single annotation occurrence as delivered by the host lexer.

use std::fmt;

use smol_str::SmolStr;

use crate::base::{ItemOrder, TextRange};

use super::extract_item_order;

/// The kind of declaration an annotation is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeclarationKind {
    /// A type-level declaration (`class Post`)
    Class,
    /// A field-level declaration (`private $author`)
    Property,
}

impl DeclarationKind {
    /// Human-readable name used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationKind::Class => "class",
            DeclarationKind::Property => "property",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an annotation sits: declaration kind, name and enclosing namespace.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeclarationContext {
    /// Class or property.
    pub kind: DeclarationKind,
    /// Declared name (`Post`, `author`).
    pub name: SmolStr,
    /// Namespace of the enclosing declaration, without leading separator.
    pub namespace: SmolStr,
}

impl DeclarationContext {
    /// Context for a class declaration.
    pub fn class(name: impl Into<SmolStr>, namespace: impl Into<SmolStr>) -> Self {
        Self {
            kind: DeclarationKind::Class,
            name: name.into(),
            namespace: namespace.into(),
        }
    }

    /// Context for a property declaration.
    pub fn property(name: impl Into<SmolStr>, namespace: impl Into<SmolStr>) -> Self {
        Self {
            kind: DeclarationKind::Property,
            name: name.into(),
            namespace: namespace.into(),
        }
    }
}

impl fmt::Display for DeclarationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            write!(f, "{} `{}`", self.kind, self.name)
        } else {
            write!(f, "{} `{}` in `{}`", self.kind, self.name, self.namespace)
        }
    }
}

/// One annotation found in source, before any interpretation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawAnnotationOccurrence<'a> {
    /// Tag name as written, e.g. `@ORM\Column`.
    pub tag_name: &'a str,
    /// Raw text following the tag name, e.g. `(type="string")`.
    pub raw_content: &'a str,
    /// Declaration the annotation is attached to.
    pub declaration: &'a DeclarationContext,
    /// Location of the occurrence in its source file, when known.
    pub range: Option<TextRange>,
}

impl<'a> RawAnnotationOccurrence<'a> {
    /// Create an occurrence without a source range.
    pub fn new(
        tag_name: &'a str,
        raw_content: &'a str,
        declaration: &'a DeclarationContext,
    ) -> Self {
        Self {
            tag_name,
            raw_content,
            declaration,
            range: None,
        }
    }

    /// Attach the source range of the occurrence.
    pub fn with_range(mut self, range: TextRange) -> Self {
        self.range = Some(range);
        self
    }

    /// Item names in the order they were written.
    pub fn item_order(&self) -> ItemOrder {
        extract_item_order(self.raw_content)
    }
}
