//! Foundation types shared by the annotation model.
//!
//! This module provides:
//! - [`ItemOrder`] - The textual order of named annotation arguments
//! - [`filter_and_sort`], [`remove_item`] - Pure ordering helpers
//! - [`TextRange`], [`TextSize`] - Source positions
//!
//! This module has NO dependencies on other ormdoc modules.

mod order;

pub use order::{ItemOrder, filter_and_sort, remove_item};

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};

/// The namespace separator of the annotated source language.
pub const NAMESPACE_SEPARATOR: char = '\\';
