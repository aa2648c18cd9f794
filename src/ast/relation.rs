//! Property-level relationship tags.
//!
//! Each relationship keeps the target entity as declared next to its
//! fully-qualified form. The `mappedBy` / `inversedBy` sides can be removed
//! after construction; removal also strikes the name from the item order so
//! the argument never renders again.

use std::fmt;

use smol_str::SmolStr;

use crate::base::ItemOrder;

use super::render::ContentItems;

/// Default fetch mode of every relationship.
pub const DEFAULT_FETCH: &str = "LAZY";

// ============================================================================
// SHARED BEHAVIOUR
// ============================================================================

/// A tag pointing at another entity.
pub trait TargetEntityNode {
    /// Target entity as written in the annotation.
    fn target_entity(&self) -> &str;

    /// Target entity after namespace qualification.
    fn fqn_target_entity(&self) -> &str;
}

/// A tag with an owning-side `mappedBy` argument.
pub trait MappedByNode {
    fn mapped_by(&self) -> Option<&str>;

    /// Null `mappedBy` and drop it from the item order.
    fn remove_mapped_by(&mut self);
}

/// A tag with an inverse-side `inversedBy` argument.
pub trait InversedByNode {
    fn inversed_by(&self) -> Option<&str>;

    /// Null `inversedBy` and drop it from the item order.
    fn remove_inversed_by(&mut self);
}

fn default_fetch() -> SmolStr {
    SmolStr::new_static(DEFAULT_FETCH)
}

macro_rules! impl_target_entity {
    ($($tag:ty),* $(,)?) => {
        $(
            impl TargetEntityNode for $tag {
                fn target_entity(&self) -> &str {
                    &self.fields.target_entity
                }

                fn fqn_target_entity(&self) -> &str {
                    &self.fqn_target_entity
                }
            }
        )*
    };
}

macro_rules! impl_mapped_by {
    ($($tag:ty),* $(,)?) => {
        $(
            impl MappedByNode for $tag {
                fn mapped_by(&self) -> Option<&str> {
                    self.fields.mapped_by.as_deref()
                }

                fn remove_mapped_by(&mut self) {
                    self.order.remove("mappedBy");
                    self.fields.mapped_by = None;
                }
            }
        )*
    };
}

macro_rules! impl_inversed_by {
    ($($tag:ty),* $(,)?) => {
        $(
            impl InversedByNode for $tag {
                fn inversed_by(&self) -> Option<&str> {
                    self.fields.inversed_by.as_deref()
                }

                fn remove_inversed_by(&mut self) {
                    self.order.remove("inversedBy");
                    self.fields.inversed_by = None;
                }
            }
        )*
    };
}

// ============================================================================
// ONE TO ONE
// ============================================================================

/// Decoded values of a `OneToOne` annotation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct OneToOneFields {
    pub target_entity: SmolStr,
    pub mapped_by: Option<SmolStr>,
    pub inversed_by: Option<SmolStr>,
    pub cascade: Option<Vec<SmolStr>>,
    pub fetch: SmolStr,
    pub orphan_removal: bool,
}

impl Default for OneToOneFields {
    fn default() -> Self {
        Self {
            target_entity: SmolStr::default(),
            mapped_by: None,
            inversed_by: None,
            cascade: None,
            fetch: default_fetch(),
            orphan_removal: false,
        }
    }
}

/// `@ORM\OneToOne(targetEntity="Address", inversedBy="customer")`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OneToOneTag {
    fields: OneToOneFields,
    order: ItemOrder,
    fqn_target_entity: SmolStr,
}

impl OneToOneTag {
    pub fn new(
        fields: OneToOneFields,
        order: ItemOrder,
        fqn_target_entity: impl Into<SmolStr>,
    ) -> Self {
        Self {
            fields,
            order,
            fqn_target_entity: fqn_target_entity.into(),
        }
    }

    pub fn fields(&self) -> &OneToOneFields {
        &self.fields
    }

    pub fn item_order(&self) -> &ItemOrder {
        &self.order
    }
}

impl fmt::Display for OneToOneTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = &self.fields;
        let mut items = ContentItems::new();
        items
            .quoted("targetEntity", Some(fields.target_entity.as_str()))
            .quoted("mappedBy", fields.mapped_by.as_deref())
            .quoted("inversedBy", fields.inversed_by.as_deref())
            .cascade(fields.cascade.as_deref().unwrap_or_default())
            .quoted("fetch", Some(fields.fetch.as_str()))
            .flag("orphanRemoval", fields.orphan_removal);

        f.write_str(&items.finish(&self.order))
    }
}

// ============================================================================
// ONE TO MANY
// ============================================================================

/// Decoded values of a `OneToMany` annotation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct OneToManyFields {
    pub mapped_by: Option<SmolStr>,
    pub target_entity: SmolStr,
    pub cascade: Option<Vec<SmolStr>>,
    pub fetch: SmolStr,
    pub orphan_removal: bool,
    pub index_by: Option<SmolStr>,
}

impl Default for OneToManyFields {
    fn default() -> Self {
        Self {
            mapped_by: None,
            target_entity: SmolStr::default(),
            cascade: None,
            fetch: default_fetch(),
            orphan_removal: false,
            index_by: None,
        }
    }
}

/// `@ORM\OneToMany(targetEntity="Comment", mappedBy="post")`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OneToManyTag {
    fields: OneToManyFields,
    order: ItemOrder,
    fqn_target_entity: SmolStr,
}

impl OneToManyTag {
    pub fn new(
        fields: OneToManyFields,
        order: ItemOrder,
        fqn_target_entity: impl Into<SmolStr>,
    ) -> Self {
        Self {
            fields,
            order,
            fqn_target_entity: fqn_target_entity.into(),
        }
    }

    pub fn fields(&self) -> &OneToManyFields {
        &self.fields
    }

    pub fn item_order(&self) -> &ItemOrder {
        &self.order
    }
}

impl fmt::Display for OneToManyTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = &self.fields;
        let mut items = ContentItems::new();
        items
            .quoted("mappedBy", fields.mapped_by.as_deref())
            .quoted("targetEntity", Some(fields.target_entity.as_str()))
            .cascade(fields.cascade.as_deref().unwrap_or_default())
            .quoted("fetch", Some(fields.fetch.as_str()))
            .flag("orphanRemoval", fields.orphan_removal)
            .quoted("indexBy", fields.index_by.as_deref());

        f.write_str(&items.finish(&self.order))
    }
}

// ============================================================================
// MANY TO ONE
// ============================================================================

/// Decoded values of a `ManyToOne` annotation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ManyToOneFields {
    pub target_entity: SmolStr,
    pub cascade: Option<Vec<SmolStr>>,
    pub fetch: SmolStr,
    pub inversed_by: Option<SmolStr>,
}

impl Default for ManyToOneFields {
    fn default() -> Self {
        Self {
            target_entity: SmolStr::default(),
            cascade: None,
            fetch: default_fetch(),
            inversed_by: None,
        }
    }
}

/// `@ORM\ManyToOne(targetEntity="User", inversedBy="posts")`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManyToOneTag {
    fields: ManyToOneFields,
    order: ItemOrder,
    fqn_target_entity: SmolStr,
}

impl ManyToOneTag {
    pub fn new(
        fields: ManyToOneFields,
        order: ItemOrder,
        fqn_target_entity: impl Into<SmolStr>,
    ) -> Self {
        Self {
            fields,
            order,
            fqn_target_entity: fqn_target_entity.into(),
        }
    }

    pub fn fields(&self) -> &ManyToOneFields {
        &self.fields
    }

    pub fn item_order(&self) -> &ItemOrder {
        &self.order
    }
}

impl fmt::Display for ManyToOneTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = &self.fields;
        let mut items = ContentItems::new();
        items
            .quoted("targetEntity", Some(fields.target_entity.as_str()))
            .cascade(fields.cascade.as_deref().unwrap_or_default())
            .quoted("fetch", Some(fields.fetch.as_str()))
            .quoted("inversedBy", fields.inversed_by.as_deref());

        f.write_str(&items.finish(&self.order))
    }
}

// ============================================================================
// MANY TO MANY
// ============================================================================

/// Decoded values of a `ManyToMany` annotation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ManyToManyFields {
    pub target_entity: SmolStr,
    pub mapped_by: Option<SmolStr>,
    pub inversed_by: Option<SmolStr>,
    pub cascade: Option<Vec<SmolStr>>,
    pub fetch: SmolStr,
    pub orphan_removal: bool,
    pub index_by: Option<SmolStr>,
}

impl Default for ManyToManyFields {
    fn default() -> Self {
        Self {
            target_entity: SmolStr::default(),
            mapped_by: None,
            inversed_by: None,
            cascade: None,
            fetch: default_fetch(),
            orphan_removal: false,
            index_by: None,
        }
    }
}

/// `@ORM\ManyToMany(targetEntity="Tag", inversedBy="posts", cascade={"persist"})`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManyToManyTag {
    fields: ManyToManyFields,
    order: ItemOrder,
    fqn_target_entity: SmolStr,
}

impl ManyToManyTag {
    pub fn new(
        fields: ManyToManyFields,
        order: ItemOrder,
        fqn_target_entity: impl Into<SmolStr>,
    ) -> Self {
        Self {
            fields,
            order,
            fqn_target_entity: fqn_target_entity.into(),
        }
    }

    pub fn fields(&self) -> &ManyToManyFields {
        &self.fields
    }

    pub fn item_order(&self) -> &ItemOrder {
        &self.order
    }
}

impl fmt::Display for ManyToManyTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = &self.fields;
        let mut items = ContentItems::new();
        items
            .quoted("targetEntity", Some(fields.target_entity.as_str()))
            .quoted("mappedBy", fields.mapped_by.as_deref())
            .quoted("inversedBy", fields.inversed_by.as_deref())
            .cascade(fields.cascade.as_deref().unwrap_or_default())
            .quoted("fetch", Some(fields.fetch.as_str()))
            .flag("orphanRemoval", fields.orphan_removal)
            .quoted("indexBy", fields.index_by.as_deref());

        f.write_str(&items.finish(&self.order))
    }
}

impl_target_entity!(OneToOneTag, OneToManyTag, ManyToOneTag, ManyToManyTag);
impl_mapped_by!(OneToOneTag, OneToManyTag, ManyToManyTag);
impl_inversed_by!(OneToOneTag, ManyToOneTag, ManyToManyTag);
