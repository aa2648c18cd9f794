//! Host knowledge of which types exist.
//!
//! Both resolvers ask the host whether a fully-qualified name refers to a
//! known, loadable type or interface. The host answers through
//! [`KnownTypes`]; this crate never loads anything itself.

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use crate::base::NAMESPACE_SEPARATOR;

/// Existence oracle for fully-qualified type names.
pub trait KnownTypes {
    /// Check whether `fqn` names a known class or interface.
    fn is_known(&self, fqn: &str) -> bool;
}

impl<F> KnownTypes for F
where
    F: Fn(&str) -> bool,
{
    fn is_known(&self, fqn: &str) -> bool {
        self(fqn)
    }
}

/// A fixed set of known type names.
///
/// Names are stored without a leading separator, so `\App\Entity\Post` and
/// `App\Entity\Post` are the same type.
#[derive(Clone, Debug, Default)]
pub struct TypeSet {
    names: FxHashSet<SmolStr>,
}

impl TypeSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type name.
    pub fn insert(&mut self, fqn: &str) {
        self.names.insert(SmolStr::new(normalize(fqn)));
    }

    /// Get the number of registered names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl KnownTypes for TypeSet {
    fn is_known(&self, fqn: &str) -> bool {
        self.names.contains(normalize(fqn))
    }
}

impl<S: AsRef<str>> FromIterator<S> for TypeSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for name in iter {
            set.insert(name.as_ref());
        }
        set
    }
}

fn normalize(fqn: &str) -> &str {
    fqn.trim_start_matches(NAMESPACE_SEPARATOR)
}
