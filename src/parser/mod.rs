//! Tag parsing: turning one annotation occurrence into a [`TagValueNode`].
//!
//! ```text
//! RawAnnotationOccurrence
//!   ├─ tag name + declaration kind ─→ TagKind (or UnimplementedTag)
//!   ├─ raw content ─────────────────→ ItemOrder
//!   └─ AnnotationReader ────────────→ AnnotationFields
//!                                        ↓
//!                                   TagValueNode
//! ```
//!
//! Relationship targets are qualified with [`TargetEntityResolver`] against
//! the namespace of the declaration.

mod error;
mod options;
mod reader;

use tracing::debug;

use crate::ast::{
    AnnotationFields, ColumnTag, EntityTag, JoinColumnTag, ManyToManyTag, ManyToOneTag,
    OneToManyTag, OneToOneTag, OrderByTag, TagKind, TagValueNode,
};
use crate::hir::{KnownTypes, TargetEntityResolver};
use crate::syntax::{DeclarationKind, RawAnnotationOccurrence};

pub use error::{OccurrenceContext, ParseError};
pub use options::TagParserOptions;
pub use reader::{AnnotationReader, StaticAnnotationReader};

/// Builds tag value nodes from raw annotation occurrences.
pub struct OrmTagParser<'a, R: ?Sized, K: ?Sized> {
    reader: &'a R,
    types: &'a K,
    options: TagParserOptions,
}

impl<'a, R, K> OrmTagParser<'a, R, K>
where
    R: AnnotationReader + ?Sized,
    K: KnownTypes + ?Sized,
{
    pub fn new(reader: &'a R, types: &'a K) -> Self {
        Self {
            reader,
            types,
            options: TagParserOptions::default(),
        }
    }

    pub fn with_options(mut self, options: TagParserOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &TagParserOptions {
        &self.options
    }

    /// Build the node for one occurrence.
    ///
    /// Fails when the tag has no node for the declaration it is attached to,
    /// or when the reader cannot supply its values.
    pub fn parse(
        &self,
        occurrence: &RawAnnotationOccurrence<'_>,
    ) -> Result<TagValueNode, ParseError> {
        let tag_kind = self.options.tag_kind(occurrence.tag_name);
        let kind = match (occurrence.declaration.kind, tag_kind) {
            (DeclarationKind::Class, Some(TagKind::Entity)) => TagKind::Entity,
            (DeclarationKind::Property, Some(kind)) if kind != TagKind::Entity => kind,
            _ => {
                return Err(ParseError::UnimplementedTag {
                    tag: occurrence.tag_name.into(),
                    context: Box::new(context_of(occurrence)),
                });
            }
        };

        let fields = self
            .reader
            .read(kind, occurrence.declaration)
            .ok_or_else(|| ParseError::MissingAnnotation {
                kind,
                context: Box::new(context_of(occurrence)),
            })?;

        if fields.kind() != kind {
            return Err(ParseError::FieldsMismatch {
                expected: kind,
                found: fields.kind(),
                context: Box::new(context_of(occurrence)),
            });
        }

        let node = self.build(occurrence, fields);
        debug!(
            tag = occurrence.tag_name,
            declaration = %occurrence.declaration,
            arguments = %node,
            "built tag value node"
        );
        Ok(node)
    }

    fn build(
        &self,
        occurrence: &RawAnnotationOccurrence<'_>,
        fields: AnnotationFields,
    ) -> TagValueNode {
        let resolver = TargetEntityResolver::new(self.types);
        let namespace = occurrence.declaration.namespace.as_str();

        match fields {
            AnnotationFields::Entity(fields) => {
                TagValueNode::Entity(EntityTag::new(fields, occurrence.item_order()))
            }
            AnnotationFields::Column(fields) => {
                TagValueNode::Column(ColumnTag::new(fields, occurrence.item_order()))
            }
            AnnotationFields::JoinColumn(fields) => {
                TagValueNode::JoinColumn(JoinColumnTag::new(fields, occurrence.item_order()))
            }
            AnnotationFields::OneToOne(fields) => {
                let fqn = resolver.resolve(&fields.target_entity, namespace);
                TagValueNode::OneToOne(OneToOneTag::new(fields, occurrence.item_order(), fqn))
            }
            AnnotationFields::OneToMany(fields) => {
                let fqn = resolver.resolve(&fields.target_entity, namespace);
                TagValueNode::OneToMany(OneToManyTag::new(fields, occurrence.item_order(), fqn))
            }
            AnnotationFields::ManyToOne(fields) => {
                let fqn = resolver.resolve(&fields.target_entity, namespace);
                TagValueNode::ManyToOne(ManyToOneTag::new(fields, occurrence.item_order(), fqn))
            }
            AnnotationFields::ManyToMany(fields) => {
                let fqn = resolver.resolve(&fields.target_entity, namespace);
                TagValueNode::ManyToMany(ManyToManyTag::new(fields, occurrence.item_order(), fqn))
            }
            AnnotationFields::OrderBy(fields) => TagValueNode::OrderBy(OrderByTag::new(fields)),
        }
    }
}

fn context_of(occurrence: &RawAnnotationOccurrence<'_>) -> OccurrenceContext {
    OccurrenceContext {
        declaration: occurrence.declaration.clone(),
        range: occurrence.range,
    }
}
