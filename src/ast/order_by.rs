//! Property-level `OrderBy` tag.

use std::fmt;

use super::render::{ScalarMap, render_map};

/// Decoded values of an `OrderBy` annotation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OrderByFields {
    /// Field name → direction, in written order.
    pub value: ScalarMap,
}

/// `@ORM\OrderBy({"createdAt"="DESC"})`
///
/// The single positional value has no item name, so no item order applies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderByTag {
    fields: OrderByFields,
}

impl OrderByTag {
    pub fn new(fields: OrderByFields) -> Self {
        Self { fields }
    }

    pub fn value(&self) -> &ScalarMap {
        &self.fields.value
    }
}

impl fmt::Display for OrderByTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fields.value.is_empty() {
            return Ok(());
        }
        write!(f, "({})", render_map(&self.fields.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::ScalarValue;

    #[test]
    fn test_order_by_renders_value() {
        let mut value = ScalarMap::new();
        value.insert("createdAt".into(), ScalarValue::from("DESC"));
        value.insert("id".into(), ScalarValue::from("ASC"));
        let tag = OrderByTag::new(OrderByFields { value });

        assert_eq!(tag.to_string(), r#"({"createdAt"="DESC", "id"="ASC"})"#);
    }

    #[test]
    fn test_empty_order_by_renders_nothing() {
        let tag = OrderByTag::new(OrderByFields::default());

        assert_eq!(tag.to_string(), "");
    }
}
