//! Property-level `Column` and `JoinColumn` tags.

use std::fmt;

use smol_str::SmolStr;

use crate::base::ItemOrder;

use super::render::{ContentItems, ScalarMap};

// ============================================================================
// COLUMN
// ============================================================================

/// Decoded values of a `Column` annotation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ColumnFields {
    pub name: Option<SmolStr>,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub column_type: SmolStr,
    pub length: Option<i64>,
    pub precision: i64,
    pub scale: i64,
    pub unique: bool,
    pub nullable: bool,
    pub options: ScalarMap,
    pub column_definition: Option<SmolStr>,
}

impl Default for ColumnFields {
    fn default() -> Self {
        Self {
            name: None,
            column_type: SmolStr::new_static("string"),
            length: None,
            precision: 0,
            scale: 0,
            unique: false,
            nullable: false,
            options: ScalarMap::new(),
            column_definition: None,
        }
    }
}

/// `@ORM\Column(type="string", length=180, unique=true)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnTag {
    fields: ColumnFields,
    order: ItemOrder,
}

impl ColumnTag {
    pub fn new(fields: ColumnFields, order: ItemOrder) -> Self {
        Self { fields, order }
    }

    pub fn fields(&self) -> &ColumnFields {
        &self.fields
    }

    pub fn column_type(&self) -> &str {
        &self.fields.column_type
    }

    pub fn is_nullable(&self) -> bool {
        self.fields.nullable
    }

    pub fn item_order(&self) -> &ItemOrder {
        &self.order
    }
}

impl fmt::Display for ColumnTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = &self.fields;
        let mut items = ContentItems::new();
        items
            .quoted("name", fields.name.as_deref())
            .quoted("type", Some(fields.column_type.as_str()))
            .integer("length", fields.length)
            .integer("precision", Some(fields.precision))
            .integer("scale", Some(fields.scale))
            .flag("unique", fields.unique)
            .flag("nullable", fields.nullable)
            .map("options", &fields.options)
            .quoted("columnDefinition", fields.column_definition.as_deref());

        f.write_str(&items.finish(&self.order))
    }
}

// ============================================================================
// JOIN COLUMN
// ============================================================================

/// Decoded values of a `JoinColumn` annotation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct JoinColumnFields {
    pub name: Option<SmolStr>,
    pub referenced_column_name: SmolStr,
    pub unique: bool,
    pub nullable: bool,
    pub on_delete: Option<SmolStr>,
    pub column_definition: Option<SmolStr>,
    pub field_name: Option<SmolStr>,
}

impl Default for JoinColumnFields {
    fn default() -> Self {
        Self {
            name: None,
            referenced_column_name: SmolStr::new_static("id"),
            unique: false,
            nullable: true,
            on_delete: None,
            column_definition: None,
            field_name: None,
        }
    }
}

/// `@ORM\JoinColumn(name="author_id", referencedColumnName="id", onDelete="CASCADE")`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JoinColumnTag {
    fields: JoinColumnFields,
    order: ItemOrder,
}

impl JoinColumnTag {
    pub fn new(fields: JoinColumnFields, order: ItemOrder) -> Self {
        Self { fields, order }
    }

    pub fn fields(&self) -> &JoinColumnFields {
        &self.fields
    }

    pub fn is_nullable(&self) -> bool {
        self.fields.nullable
    }

    pub fn item_order(&self) -> &ItemOrder {
        &self.order
    }
}

impl fmt::Display for JoinColumnTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = &self.fields;
        let mut items = ContentItems::new();
        // `nullable` is written twice; the second write lands in the first slot.
        items
            .flag("nullable", fields.nullable)
            .quoted("name", fields.name.as_deref())
            .quoted("referencedColumnName", Some(fields.referenced_column_name.as_str()))
            .flag("unique", fields.unique)
            .flag("nullable", fields.nullable)
            .quoted("onDelete", fields.on_delete.as_deref())
            .quoted("columnDefinition", fields.column_definition.as_deref())
            .quoted("fieldName", fields.field_name.as_deref());

        f.write_str(&items.finish(&self.order))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::ScalarValue;
    use crate::syntax::extract_item_order;

    #[test]
    fn test_column_keeps_written_order() {
        let raw = r#"(type="string", length=180, unique=true, name="email")"#;
        let fields = ColumnFields {
            name: Some("email".into()),
            length: Some(180),
            unique: true,
            ..ColumnFields::default()
        };
        let tag = ColumnTag::new(fields, extract_item_order(raw));

        assert_eq!(tag.to_string(), raw);
    }

    #[test]
    fn test_column_with_options() {
        let raw = r#"(type="integer", options={"unsigned"=true, "default"=0})"#;
        let mut options = ScalarMap::new();
        options.insert("unsigned".into(), ScalarValue::Boolean(true));
        options.insert("default".into(), ScalarValue::Integer(0));
        let fields = ColumnFields {
            column_type: "integer".into(),
            options,
            ..ColumnFields::default()
        };
        let tag = ColumnTag::new(fields, extract_item_order(raw));

        assert_eq!(tag.to_string(), raw);
    }

    #[test]
    fn test_column_decimal_precision() {
        let raw = r#"(type="decimal", precision=10, scale=2, nullable=true)"#;
        let fields = ColumnFields {
            column_type: "decimal".into(),
            precision: 10,
            scale: 2,
            nullable: true,
            ..ColumnFields::default()
        };
        let tag = ColumnTag::new(fields, extract_item_order(raw));

        assert_eq!(tag.to_string(), raw);
        assert!(tag.is_nullable());
    }

    #[test]
    fn test_join_column_duplicate_nullable_renders_once() {
        let raw = r#"(nullable=true, name="id", referencedColumnName="id")"#;
        let fields = JoinColumnFields {
            name: Some("id".into()),
            nullable: true,
            ..JoinColumnFields::default()
        };
        let tag = JoinColumnTag::new(fields, extract_item_order(raw));

        assert_eq!(tag.to_string(), raw);
    }

    #[test]
    fn test_join_column_on_delete() {
        let raw = r#"(name="author_id", referencedColumnName="id", onDelete="CASCADE")"#;
        let fields = JoinColumnFields {
            name: Some("author_id".into()),
            on_delete: Some("CASCADE".into()),
            ..JoinColumnFields::default()
        };
        let tag = JoinColumnTag::new(fields, extract_item_order(raw));

        assert_eq!(tag.to_string(), raw);
    }

    #[test]
    fn test_column_definition() {
        let raw = r#"(type="string", columnDefinition="CHAR(2) NOT NULL", unique=false)"#;
        let fields = ColumnFields {
            column_definition: Some("CHAR(2) NOT NULL".into()),
            ..ColumnFields::default()
        };
        let tag = ColumnTag::new(fields, extract_item_order(raw));

        assert_eq!(tag.to_string(), raw);
    }

    #[test]
    fn test_join_column_remaining_items() {
        let raw = concat!(
            r#"(fieldName="tag", unique=true, name="tag_id", "#,
            r#"columnDefinition="CHAR(36)", referencedColumnName="uuid")"#,
        );
        let fields = JoinColumnFields {
            name: Some("tag_id".into()),
            referenced_column_name: "uuid".into(),
            unique: true,
            column_definition: Some("CHAR(36)".into()),
            field_name: Some("tag".into()),
            ..JoinColumnFields::default()
        };
        let tag = JoinColumnTag::new(fields, extract_item_order(raw));

        assert_eq!(tag.to_string(), raw);
        assert!(tag.is_nullable());
    }

    #[test]
    fn test_join_column_absent_name_renders_empty_quotes() {
        let fields = JoinColumnFields::default();
        let tag = JoinColumnTag::new(fields, extract_item_order(r#"(name=null)"#));

        assert_eq!(tag.to_string(), r#"(name="")"#);
    }
}
