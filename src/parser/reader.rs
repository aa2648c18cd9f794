//! Decoding of annotation values, supplied by the host.

use rustc_hash::FxHashMap;

use crate::ast::{AnnotationFields, TagKind};
use crate::syntax::DeclarationContext;

/// Produces typed field values for one annotation occurrence.
///
/// Hosts typically implement this on top of their own annotation decoder.
pub trait AnnotationReader {
    /// Read the `kind` annotation attached to `declaration`.
    fn read(&self, kind: TagKind, declaration: &DeclarationContext) -> Option<AnnotationFields>;
}

/// An in-memory reader holding pre-decoded values.
#[derive(Clone, Debug, Default)]
pub struct StaticAnnotationReader {
    values: FxHashMap<(DeclarationContext, TagKind), AnnotationFields>,
}

impl StaticAnnotationReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the values of an annotation on `declaration`.
    ///
    /// A second registration for the same declaration and kind replaces the first.
    pub fn insert(&mut self, declaration: DeclarationContext, fields: AnnotationFields) {
        self.values.insert((declaration, fields.kind()), fields);
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, declaration: DeclarationContext, fields: AnnotationFields) -> Self {
        self.insert(declaration, fields);
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl AnnotationReader for StaticAnnotationReader {
    fn read(&self, kind: TagKind, declaration: &DeclarationContext) -> Option<AnnotationFields> {
        self.values.get(&(declaration.clone(), kind)).cloned()
    }
}
