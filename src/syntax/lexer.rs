//! Item order extraction from raw annotation text.
//!
//! The scan is purely lexical. Every maximal run of word characters that is
//! immediately followed by `=` counts as an item name, even inside quoted
//! strings, which is how the annotation dialect itself records argument order.

use logos::Logos;
use smol_str::SmolStr;

use crate::base::ItemOrder;

/// Tokens relevant to item order. Everything else is skipped as an error.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum ItemToken {
    /// `name=`
    #[regex(r"[A-Za-z0-9_]+=")]
    Key,

    /// A word not followed by `=`
    #[regex(r"[A-Za-z0-9_]+")]
    Word,
}

/// Extract the names of all `name=` items in the order they were written.
///
/// Duplicates are kept as encountered. Text without named arguments
/// yields an empty order.
pub fn extract_item_order(raw_content: &str) -> ItemOrder {
    let mut lexer = ItemToken::lexer(raw_content);
    let mut order = ItemOrder::new();

    while let Some(token) = lexer.next() {
        if let Ok(ItemToken::Key) = token {
            let slice = lexer.slice();
            order.push(SmolStr::new(&slice[..slice.len() - 1]));
        }
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(raw: &str) -> Vec<String> {
        extract_item_order(raw).iter().map(str::to_string).collect()
    }

    #[test]
    fn test_extract_in_textual_order() {
        let raw = r#"(type="string", name="email", length=180)"#;

        assert_eq!(names(raw), vec!["type", "name", "length"]);
    }

    #[test]
    fn test_extract_without_arguments() {
        assert!(extract_item_order("").is_empty());
        assert!(extract_item_order("()").is_empty());
        assert!(extract_item_order(r#"("App\Repository")"#).is_empty());
    }

    #[test]
    fn test_extract_ignores_spaced_equals() {
        // `name =` has a space before `=`, which the dialect does not record
        let raw = r#"(name = "id", nullable=true)"#;

        assert_eq!(names(raw), vec!["nullable"]);
    }

    #[test]
    fn test_extract_ignores_quoted_keys() {
        let raw = r#"(options={"default"=0, "unsigned"=true}, type="integer")"#;

        assert_eq!(names(raw), vec!["options", "type"]);
    }

    #[test]
    fn test_extract_keeps_duplicates() {
        let raw = r#"(name="a", name="b")"#;

        assert_eq!(names(raw), vec!["name", "name"]);
    }

    #[test]
    fn test_extract_across_lines() {
        let raw = "(\n *     targetEntity=\"Post\",\n *     mappedBy=\"author\"\n * )";

        assert_eq!(names(raw), vec!["targetEntity", "mappedBy"]);
    }

    #[test]
    fn test_extract_matches_inside_strings() {
        let raw = r#"(columnDefinition="INT CHECK (x=1)", name="x")"#;

        assert_eq!(names(raw), vec!["columnDefinition", "x", "name"]);
    }
}
