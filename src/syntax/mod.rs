//! Raw annotation input: occurrences, declaration context, and item order extraction.

mod lexer;
mod occurrence;

pub use lexer::extract_item_order;
pub use occurrence::{DeclarationContext, DeclarationKind, RawAnnotationOccurrence};
