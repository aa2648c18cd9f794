//! Errors raised while turning an annotation occurrence into a node.

use std::fmt;

use smol_str::SmolStr;
use thiserror::Error;

use crate::ast::TagKind;
use crate::base::TextRange;
use crate::syntax::DeclarationContext;

/// Where a failing occurrence came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccurrenceContext {
    /// Declaration the annotation is attached to.
    pub declaration: DeclarationContext,
    /// Location of the occurrence, when the host supplied one.
    pub range: Option<TextRange>,
}

impl fmt::Display for OccurrenceContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.range {
            Some(range) => write!(
                f,
                "{} at {}..{}",
                self.declaration,
                u32::from(range.start()),
                u32::from(range.end())
            ),
            None => write!(f, "{}", self.declaration),
        }
    }
}

/// Failure to build a tag value node.
///
/// All variants are fatal for the rewrite step that requested the node.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No node exists for this tag on this kind of declaration.
    #[error("tag `{tag}` is not implemented for {context}")]
    UnimplementedTag {
        tag: SmolStr,
        context: Box<OccurrenceContext>,
    },

    /// The annotation reader could not decode the occurrence.
    #[error("annotation `{kind}` could not be read from {context}")]
    MissingAnnotation {
        kind: TagKind,
        context: Box<OccurrenceContext>,
    },

    /// The annotation reader returned values for a different kind.
    #[error("expected `{expected}` values but the reader returned `{found}` for {context}")]
    FieldsMismatch {
        expected: TagKind,
        found: TagKind,
        context: Box<OccurrenceContext>,
    },
}

impl ParseError {
    /// The context of the failing occurrence.
    pub fn context(&self) -> &OccurrenceContext {
        match self {
            ParseError::UnimplementedTag { context, .. }
            | ParseError::MissingAnnotation { context, .. }
            | ParseError::FieldsMismatch { context, .. } => context,
        }
    }
}
