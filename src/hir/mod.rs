//! Name resolution: qualifying names written in annotations and legacy code.
//!
//! Each resolver walks a short, fixed list of candidates and asks the host
//! which of them exist. It never fails; an unresolvable name degrades to a
//! best-effort string.
//!
//! - [`TargetEntityResolver`] - Relationship targets against the current namespace
//! - [`PseudoNamespaceResolver`] - Legacy `(location, class)` pairs
//! - [`KnownTypes`] - The host's answer to "does this type exist?"

mod legacy;
mod target;
mod types;

pub use legacy::{LegacyResolution, LegacyResolverOptions, PseudoNamespaceResolver, RENAMED_CLASSES};
pub use target::{TargetEntityResolver, TargetResolution};
pub use types::{KnownTypes, TypeSet};
