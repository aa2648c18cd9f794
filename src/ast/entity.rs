//! Class-level `Entity` tag.

use std::fmt;

use smol_str::SmolStr;

use crate::base::ItemOrder;

use super::render::ContentItems;

/// Decoded values of an `Entity` annotation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct EntityFields {
    pub repository_class: Option<SmolStr>,
    pub read_only: bool,
}

/// `@ORM\Entity(repositoryClass="...", readOnly=true)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityTag {
    fields: EntityFields,
    order: ItemOrder,
}

impl EntityTag {
    pub fn new(fields: EntityFields, order: ItemOrder) -> Self {
        Self { fields, order }
    }

    pub fn repository_class(&self) -> Option<&str> {
        self.fields.repository_class.as_deref()
    }

    pub fn is_read_only(&self) -> bool {
        self.fields.read_only
    }

    pub fn item_order(&self) -> &ItemOrder {
        &self.order
    }
}

impl fmt::Display for EntityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut items = ContentItems::new();
        items
            .quoted("repositoryClass", self.repository_class())
            .flag("readOnly", self.fields.read_only);

        f.write_str(&items.finish(&self.order))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::extract_item_order;

    #[test]
    fn test_entity_renders_repository_class() {
        let fields = EntityFields {
            repository_class: Some(r"App\Repository\PostRepository".into()),
            read_only: false,
        };
        let raw = r#"(repositoryClass="App\Repository\PostRepository")"#;
        let tag = EntityTag::new(fields, extract_item_order(raw));

        assert_eq!(tag.to_string(), r#"(repositoryClass="App\Repository\PostRepository")"#);
    }

    #[test]
    fn test_entity_keeps_written_order() {
        let fields = EntityFields {
            repository_class: Some("PostRepository".into()),
            read_only: true,
        };
        let raw = r#"(readOnly=true, repositoryClass="PostRepository")"#;
        let tag = EntityTag::new(fields, extract_item_order(raw));

        assert_eq!(tag.to_string(), r#"(readOnly=true, repositoryClass="PostRepository")"#);
    }

    #[test]
    fn test_bare_entity_renders_nothing() {
        let tag = EntityTag::new(EntityFields::default(), ItemOrder::new());

        assert_eq!(tag.to_string(), "");
    }
}
