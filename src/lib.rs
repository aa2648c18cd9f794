//! # ormdoc-base
//!
//! Tag value nodes for ORM mapping annotations in doc comments, and name
//! resolution for legacy pseudo-namespaced classes.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! parser  → Occurrence → TagValueNode (reader + resolver glue)
//!   ↓
//! hir     → Target entity and legacy class name resolution
//!   ↓
//! ast     → Tag value nodes and argument rendering
//!   ↓
//! syntax  → Raw occurrences, item order extraction
//!   ↓
//! base    → Primitives (ItemOrder, TextRange)
//! ```

// ============================================================================
// FOUNDATION
// ============================================================================

/// Foundation types: ItemOrder, TextRange
pub mod base;

/// Raw annotation occurrences and the item order lexer
pub mod syntax;

// ============================================================================
// NODES AND RESOLUTION
// ============================================================================

/// Tag value nodes: Entity, Column, JoinColumn, relationships, OrderBy
pub mod ast;

/// Name resolution: target entities and legacy class locations
pub mod hir;

/// Occurrence parsing: tag recognition, annotation reading, node assembly
pub mod parser;

// Re-export commonly needed items
pub use ast::{AnnotationFields, TagKind, TagValueNode};
pub use base::{ItemOrder, TextRange, TextSize};
pub use hir::{KnownTypes, PseudoNamespaceResolver, TargetEntityResolver, TypeSet};
pub use parser::{AnnotationReader, OrmTagParser, ParseError, TagParserOptions};
pub use syntax::{DeclarationContext, RawAnnotationOccurrence};
