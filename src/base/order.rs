//! Item ordering: the textual order of named annotation arguments.
//!
//! An annotation like `@ORM\Column(type="string", name="email")` is written
//! with its arguments in a particular order. When the annotation is rendered
//! back to text, that order must survive, even after some arguments are
//! dropped. [`ItemOrder`] records the order once; [`filter_and_sort`] applies
//! it to a set of rendered candidates.

use std::fmt;

use smol_str::SmolStr;

/// The sequence of item names in the order they were written.
///
/// Names are expected to be unique but this is not enforced: duplicates are
/// kept exactly as encountered, and lookups use the first occurrence.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemOrder {
    items: Vec<SmolStr>,
}

impl ItemOrder {
    /// Create an empty order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Position of the first occurrence of `name`, if any.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item == name)
    }

    /// Check whether `name` is part of the order.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Append a name at the end.
    pub fn push(&mut self, name: impl Into<SmolStr>) {
        self.items.push(name.into());
    }

    /// Strike the first occurrence of `name`.
    ///
    /// Removing an absent name is a no-op, so repeated removal is harmless.
    pub fn remove(&mut self, name: &str) {
        if let Some(position) = self.position(name) {
            self.items.remove(position);
        }
    }

    /// Iterate over the names in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.items.iter().map(SmolStr::as_str)
    }

    /// Get the names as a slice.
    pub fn as_slice(&self) -> &[SmolStr] {
        &self.items
    }

    /// Get the number of names.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if no names were recorded.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Debug for ItemOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<S: Into<SmolStr>> FromIterator<S> for ItemOrder {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ItemOrder {
    type Item = &'a SmolStr;
    type IntoIter = std::slice::Iter<'a, SmolStr>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// ============================================================================
// FILTERING
// ============================================================================

/// Keep the items whose name is in `order`, sorted by that order.
///
/// Items without a matching name in `order` are dropped. Names in `order`
/// that have no item are ignored. The sort is stable, so items whose names
/// share a position keep their input order.
pub fn filter_and_sort<K, V, I>(items: I, order: &ItemOrder) -> Vec<(K, V)>
where
    K: AsRef<str>,
    I: IntoIterator<Item = (K, V)>,
{
    let mut visible: Vec<(usize, K, V)> = items
        .into_iter()
        .filter_map(|(name, value)| {
            order
                .position(name.as_ref())
                .map(|position| (position, name, value))
        })
        .collect();

    visible.sort_by_key(|(position, _, _)| *position);

    visible
        .into_iter()
        .map(|(_, name, value)| (name, value))
        .collect()
}

/// Return `order` with the first occurrence of `name` excised.
pub fn remove_item(order: &ItemOrder, name: &str) -> ItemOrder {
    let mut order = order.clone();
    order.remove(name);
    order
}
