//! Tag value nodes: structured ORM annotations that render back to text.
//!
//! ## Rendering
//!
//! Every node renders its argument list through [`std::fmt::Display`]:
//!
//! ```text
//! candidates (canonical field order)
//!     ↓ filter_and_sort(order)
//! "(" + items.join(", ") + ")"   or   ""   when nothing is visible
//! ```
//!
//! Only arguments that were written in the source are visible, and they come
//! out in the order they were written.

mod column;
mod entity;
mod order_by;
mod relation;
mod render;

use std::fmt;

use crate::base::ItemOrder;
use crate::syntax::DeclarationKind;

pub use column::{ColumnFields, ColumnTag, JoinColumnFields, JoinColumnTag};
pub use entity::{EntityFields, EntityTag};
pub use order_by::{OrderByFields, OrderByTag};
pub use relation::{
    DEFAULT_FETCH, InversedByNode, ManyToManyFields, ManyToManyTag, ManyToOneFields,
    ManyToOneTag, MappedByNode, OneToManyFields, OneToManyTag, OneToOneFields, OneToOneTag,
    TargetEntityNode,
};
pub use render::{ScalarMap, ScalarValue};

// ============================================================================
// TAG KIND
// ============================================================================

/// The annotation kinds this crate models.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TagKind {
    Entity,
    Column,
    JoinColumn,
    OneToOne,
    OneToMany,
    ManyToOne,
    ManyToMany,
    OrderBy,
}

impl TagKind {
    /// All kinds, in declaration order.
    pub const ALL: [TagKind; 8] = [
        TagKind::Entity,
        TagKind::Column,
        TagKind::JoinColumn,
        TagKind::OneToOne,
        TagKind::OneToMany,
        TagKind::ManyToOne,
        TagKind::ManyToMany,
        TagKind::OrderBy,
    ];

    /// Short class name of the annotation (`Column`).
    pub fn short_name(&self) -> &'static str {
        match self {
            TagKind::Entity => "Entity",
            TagKind::Column => "Column",
            TagKind::JoinColumn => "JoinColumn",
            TagKind::OneToOne => "OneToOne",
            TagKind::OneToMany => "OneToMany",
            TagKind::ManyToOne => "ManyToOne",
            TagKind::ManyToMany => "ManyToMany",
            TagKind::OrderBy => "OrderBy",
        }
    }

    /// Look up a kind by its short class name.
    pub fn from_short_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.short_name() == name)
    }

    /// The declaration kind this annotation may be attached to.
    pub fn declaration_kind(&self) -> DeclarationKind {
        match self {
            TagKind::Entity => DeclarationKind::Class,
            _ => DeclarationKind::Property,
        }
    }

    /// Check if this kind is a relationship.
    pub fn is_relationship(&self) -> bool {
        matches!(
            self,
            TagKind::OneToOne | TagKind::OneToMany | TagKind::ManyToOne | TagKind::ManyToMany
        )
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

// ============================================================================
// DECODED FIELDS
// ============================================================================

/// Typed field values of one annotation occurrence, one case per kind.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind"))]
pub enum AnnotationFields {
    Entity(EntityFields),
    Column(ColumnFields),
    JoinColumn(JoinColumnFields),
    OneToOne(OneToOneFields),
    OneToMany(OneToManyFields),
    ManyToOne(ManyToOneFields),
    ManyToMany(ManyToManyFields),
    OrderBy(OrderByFields),
}

impl AnnotationFields {
    pub fn kind(&self) -> TagKind {
        match self {
            AnnotationFields::Entity(_) => TagKind::Entity,
            AnnotationFields::Column(_) => TagKind::Column,
            AnnotationFields::JoinColumn(_) => TagKind::JoinColumn,
            AnnotationFields::OneToOne(_) => TagKind::OneToOne,
            AnnotationFields::OneToMany(_) => TagKind::OneToMany,
            AnnotationFields::ManyToOne(_) => TagKind::ManyToOne,
            AnnotationFields::ManyToMany(_) => TagKind::ManyToMany,
            AnnotationFields::OrderBy(_) => TagKind::OrderBy,
        }
    }

    /// Declared target entity of a relationship.
    pub fn target_entity(&self) -> Option<&str> {
        match self {
            AnnotationFields::OneToOne(fields) => Some(fields.target_entity.as_str()),
            AnnotationFields::OneToMany(fields) => Some(fields.target_entity.as_str()),
            AnnotationFields::ManyToOne(fields) => Some(fields.target_entity.as_str()),
            AnnotationFields::ManyToMany(fields) => Some(fields.target_entity.as_str()),
            _ => None,
        }
    }
}

// ============================================================================
// TAG VALUE NODE
// ============================================================================

/// A structured ORM annotation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TagValueNode {
    Entity(EntityTag),
    Column(ColumnTag),
    JoinColumn(JoinColumnTag),
    OneToOne(OneToOneTag),
    OneToMany(OneToManyTag),
    ManyToOne(ManyToOneTag),
    ManyToMany(ManyToManyTag),
    OrderBy(OrderByTag),
}

impl TagValueNode {
    pub fn kind(&self) -> TagKind {
        match self {
            TagValueNode::Entity(_) => TagKind::Entity,
            TagValueNode::Column(_) => TagKind::Column,
            TagValueNode::JoinColumn(_) => TagKind::JoinColumn,
            TagValueNode::OneToOne(_) => TagKind::OneToOne,
            TagValueNode::OneToMany(_) => TagKind::OneToMany,
            TagValueNode::ManyToOne(_) => TagKind::ManyToOne,
            TagValueNode::ManyToMany(_) => TagKind::ManyToMany,
            TagValueNode::OrderBy(_) => TagKind::OrderBy,
        }
    }

    /// The item order the node renders with. `OrderBy` has none.
    pub fn item_order(&self) -> Option<&ItemOrder> {
        match self {
            TagValueNode::Entity(tag) => Some(tag.item_order()),
            TagValueNode::Column(tag) => Some(tag.item_order()),
            TagValueNode::JoinColumn(tag) => Some(tag.item_order()),
            TagValueNode::OneToOne(tag) => Some(tag.item_order()),
            TagValueNode::OneToMany(tag) => Some(tag.item_order()),
            TagValueNode::ManyToOne(tag) => Some(tag.item_order()),
            TagValueNode::ManyToMany(tag) => Some(tag.item_order()),
            TagValueNode::OrderBy(_) => None,
        }
    }

    fn as_target_entity(&self) -> Option<&dyn TargetEntityNode> {
        match self {
            TagValueNode::OneToOne(tag) => Some(tag),
            TagValueNode::OneToMany(tag) => Some(tag),
            TagValueNode::ManyToOne(tag) => Some(tag),
            TagValueNode::ManyToMany(tag) => Some(tag),
            _ => None,
        }
    }

    /// Get the node as a `mappedBy` carrier, if it has that argument.
    pub fn as_mapped_by_mut(&mut self) -> Option<&mut dyn MappedByNode> {
        match self {
            TagValueNode::OneToOne(tag) => Some(tag),
            TagValueNode::OneToMany(tag) => Some(tag),
            TagValueNode::ManyToMany(tag) => Some(tag),
            _ => None,
        }
    }

    /// Get the node as an `inversedBy` carrier, if it has that argument.
    pub fn as_inversed_by_mut(&mut self) -> Option<&mut dyn InversedByNode> {
        match self {
            TagValueNode::OneToOne(tag) => Some(tag),
            TagValueNode::ManyToOne(tag) => Some(tag),
            TagValueNode::ManyToMany(tag) => Some(tag),
            _ => None,
        }
    }

    /// Target entity as declared, for relationships.
    pub fn target_entity(&self) -> Option<&str> {
        self.as_target_entity().map(|tag| tag.target_entity())
    }

    /// Fully-qualified target entity, for relationships.
    pub fn fqn_target_entity(&self) -> Option<&str> {
        self.as_target_entity().map(|tag| tag.fqn_target_entity())
    }

    /// Remove `mappedBy`. Returns `false` if the kind has no such argument.
    pub fn remove_mapped_by(&mut self) -> bool {
        match self.as_mapped_by_mut() {
            Some(tag) => {
                tag.remove_mapped_by();
                true
            }
            None => false,
        }
    }

    /// Remove `inversedBy`. Returns `false` if the kind has no such argument.
    pub fn remove_inversed_by(&mut self) -> bool {
        match self.as_inversed_by_mut() {
            Some(tag) => {
                tag.remove_inversed_by();
                true
            }
            None => false,
        }
    }

    /// Render the whole annotation, e.g. `@ORM\Column(type="string")`.
    pub fn render_tag(&self, alias: &str) -> String {
        format!("@{alias}\\{}{self}", self.kind().short_name())
    }
}

impl fmt::Display for TagValueNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagValueNode::Entity(tag) => fmt::Display::fmt(tag, f),
            TagValueNode::Column(tag) => fmt::Display::fmt(tag, f),
            TagValueNode::JoinColumn(tag) => fmt::Display::fmt(tag, f),
            TagValueNode::OneToOne(tag) => fmt::Display::fmt(tag, f),
            TagValueNode::OneToMany(tag) => fmt::Display::fmt(tag, f),
            TagValueNode::ManyToOne(tag) => fmt::Display::fmt(tag, f),
            TagValueNode::ManyToMany(tag) => fmt::Display::fmt(tag, f),
            TagValueNode::OrderBy(tag) => fmt::Display::fmt(tag, f),
        }
    }
}
