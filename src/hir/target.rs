//! Target entity resolution for relationship tags.
//!
//! A relationship names its target as written (`targetEntity="Comment"`).
//! Resolution qualifies it against the namespace of the declaring class:
//!
//! 1. the name as written, if it is already a known type
//! 2. `<namespace>\<name>`, if that is a known type
//! 3. the name as written, unresolved
//!
//! Resolution never fails. An unknown target is common in fixtures where
//! the target type is simply not loaded.

use smol_str::SmolStr;
use tracing::{debug, trace};

use crate::base::NAMESPACE_SEPARATOR;

use super::types::KnownTypes;

/// Which resolution step produced a target entity name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TargetResolution {
    /// The declared name is itself a known type.
    Declared(SmolStr),
    /// The declared name qualified by the current namespace is known.
    Namespaced(SmolStr),
    /// Nothing matched; the declared name is returned as is.
    Unresolved(SmolStr),
}

impl TargetResolution {
    /// The resolved name.
    pub fn name(&self) -> &str {
        match self {
            TargetResolution::Declared(name)
            | TargetResolution::Namespaced(name)
            | TargetResolution::Unresolved(name) => name,
        }
    }

    /// Consume into the resolved name.
    pub fn into_name(self) -> SmolStr {
        match self {
            TargetResolution::Declared(name)
            | TargetResolution::Namespaced(name)
            | TargetResolution::Unresolved(name) => name,
        }
    }

    /// Check if the name was found among the known types.
    pub fn is_found(&self) -> bool {
        !matches!(self, TargetResolution::Unresolved(_))
    }
}

/// Resolves declared target entities to fully-qualified names.
pub struct TargetEntityResolver<'a, K: ?Sized> {
    types: &'a K,
}

impl<'a, K: KnownTypes + ?Sized> TargetEntityResolver<'a, K> {
    pub fn new(types: &'a K) -> Self {
        Self { types }
    }

    /// Resolve `declared` against `current_namespace`.
    pub fn resolve(&self, declared: &str, current_namespace: &str) -> SmolStr {
        self.resolve_detailed(declared, current_namespace).into_name()
    }

    /// Resolve and report which step matched.
    pub fn resolve_detailed(&self, declared: &str, current_namespace: &str) -> TargetResolution {
        if self.types.is_known(declared) {
            trace!(declared, "target entity is a known type");
            return TargetResolution::Declared(SmolStr::new(declared));
        }

        let namespaced = format!("{current_namespace}{NAMESPACE_SEPARATOR}{declared}");
        if self.types.is_known(&namespaced) {
            trace!(declared, namespaced = %namespaced, "target entity found in current namespace");
            return TargetResolution::Namespaced(SmolStr::new(namespaced));
        }

        debug!(declared, current_namespace, "target entity left unresolved");
        TargetResolution::Unresolved(SmolStr::new(declared))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hir::TypeSet;

    fn types() -> TypeSet {
        [r"App\Entity\Comment", r"Vendor\Model\Tag"].into_iter().collect()
    }

    #[test]
    fn test_resolve_known_declared_name() {
        let types = types();
        let resolver = TargetEntityResolver::new(&types);

        let result = resolver.resolve_detailed(r"Vendor\Model\Tag", r"App\Entity");
        assert_eq!(result, TargetResolution::Declared(r"Vendor\Model\Tag".into()));
    }

    #[test]
    fn test_resolve_in_current_namespace() {
        let types = types();
        let resolver = TargetEntityResolver::new(&types);

        assert_eq!(resolver.resolve("Comment", r"App\Entity"), r"App\Entity\Comment");
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_declared() {
        let types = types();
        let resolver = TargetEntityResolver::new(&types);

        let result = resolver.resolve_detailed("Attachment", r"App\Entity");
        assert!(!result.is_found());
        assert_eq!(result.name(), "Attachment");
    }

    #[test]
    fn test_declared_name_wins_over_namespace() {
        // Both `Comment` and `App\Entity\Comment` exist
        let types: TypeSet = ["Comment", r"App\Entity\Comment"].into_iter().collect();
        let resolver = TargetEntityResolver::new(&types);

        assert_eq!(resolver.resolve("Comment", r"App\Entity"), "Comment");
    }
}
