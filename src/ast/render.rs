//! Rendering of annotation argument lists.
//!
//! Every node renders the same way: build candidate items in a fixed
//! canonical order, keep only those named in the node's [`ItemOrder`], sort
//! them by it, and wrap the result in parentheses.

use std::fmt;

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::base::{ItemOrder, filter_and_sort};

/// A scalar value inside an annotation map (`options`, `OrderBy`).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ScalarValue {
    Boolean(bool),
    Integer(i64),
    String(SmolStr),
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Boolean(value) => write!(f, "{value}"),
            ScalarValue::Integer(value) => write!(f, "{value}"),
            ScalarValue::String(value) => f.write_str(&json_string(value)),
        }
    }
}

impl From<bool> for ScalarValue {
    fn from(value: bool) -> Self {
        ScalarValue::Boolean(value)
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        ScalarValue::Integer(value)
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        ScalarValue::String(value.into())
    }
}

/// An ordered annotation map such as `{"default"=0, "unsigned"=true}`.
pub type ScalarMap = IndexMap<SmolStr, ScalarValue>;

/// Candidate items of one annotation, keyed by item name.
///
/// Writing a key twice overwrites its value but keeps the slot of the first
/// write.
#[derive(Debug, Default)]
pub(crate) struct ContentItems {
    items: IndexMap<&'static str, String>,
}

impl ContentItems {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// `key="value"`, rendered as `key=""` when absent.
    pub(crate) fn quoted(&mut self, key: &'static str, value: Option<&str>) -> &mut Self {
        self.items
            .insert(key, format!("{key}=\"{}\"", value.unwrap_or_default()));
        self
    }

    /// `key=true` or `key=false`.
    pub(crate) fn flag(&mut self, key: &'static str, value: bool) -> &mut Self {
        self.items.insert(key, format!("{key}={value}"));
        self
    }

    /// `key=42`, skipped when absent.
    pub(crate) fn integer(&mut self, key: &'static str, value: Option<i64>) -> &mut Self {
        if let Some(value) = value {
            self.items.insert(key, format!("{key}={value}"));
        }
        self
    }

    /// `cascade={"persist", "remove"}`, skipped when empty.
    pub(crate) fn cascade(&mut self, cascade: &[SmolStr]) -> &mut Self {
        if !cascade.is_empty() {
            let list = cascade
                .iter()
                .map(|strategy| json_string(strategy))
                .collect::<Vec<_>>()
                .join(", ");
            self.items.insert("cascade", format!("cascade={{{list}}}"));
        }
        self
    }

    /// `key={"name"=value, ...}`, skipped when empty.
    pub(crate) fn map(&mut self, key: &'static str, map: &ScalarMap) -> &mut Self {
        if !map.is_empty() {
            self.items.insert(key, format!("{key}={}", render_map(map)));
        }
        self
    }

    /// Filter and sort by `order`, then join into `(a, b)` or `""`.
    pub(crate) fn finish(self, order: &ItemOrder) -> String {
        let visible = filter_and_sort(self.items, order);
        if visible.is_empty() {
            return String::new();
        }

        let body = visible
            .into_iter()
            .map(|(_, rendered)| rendered)
            .collect::<Vec<_>>()
            .join(", ");
        format!("({body})")
    }
}

/// Render a map as `{"name"=value, ...}`.
pub(crate) fn render_map(map: &ScalarMap) -> String {
    let entries = map
        .iter()
        .map(|(name, value)| format!("{}={value}", json_string(name)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{entries}}}")
}

fn json_string(value: &str) -> String {
    serde_json::Value::String(value.to_owned()).to_string()
}
