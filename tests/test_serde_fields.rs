//! Decoding annotation values from JSON, as a host decoder would supply them.
#![cfg(feature = "serde")]

use ormdoc::ast::{ColumnFields, ScalarValue};
use ormdoc::{AnnotationFields, TagKind};

#[test]
fn test_column_fields_from_json() {
    let json = r#"{
        "kind": "Column",
        "type": "integer",
        "nullable": true,
        "options": {"unsigned": true, "default": 0}
    }"#;

    let fields: AnnotationFields = serde_json::from_str(json).unwrap();
    assert_eq!(fields.kind(), TagKind::Column);

    let AnnotationFields::Column(column) = fields else {
        panic!("expected Column fields");
    };
    assert_eq!(column.column_type, "integer");
    assert!(column.nullable);
    assert_eq!(column.precision, 0);
    assert_eq!(column.options.get("unsigned"), Some(&ScalarValue::Boolean(true)));
    assert_eq!(column.options.get("default"), Some(&ScalarValue::Integer(0)));
}

#[test]
fn test_relationship_defaults_from_json() {
    let json = r#"{"kind": "ManyToOne", "targetEntity": "User"}"#;

    let fields: AnnotationFields = serde_json::from_str(json).unwrap();
    assert_eq!(fields.target_entity(), Some("User"));

    let AnnotationFields::ManyToOne(many_to_one) = fields else {
        panic!("expected ManyToOne fields");
    };
    assert_eq!(many_to_one.fetch, "LAZY");
    assert_eq!(many_to_one.cascade, None);
}

#[test]
fn test_column_defaults_from_empty_object() {
    let fields: ColumnFields = serde_json::from_str("{}").unwrap();

    assert_eq!(fields, ColumnFields::default());
}
