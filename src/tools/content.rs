//! The `get_content` tool — a fixed two-item text payload.
//!
//! The payload is deliberately a pair: the harness exists to show that the
//! hosted model service surfaces only the first item of a multi-item tool
//! result. Both strings are compile-time constants; the tool builds a fresh
//! sequence on every call and cannot fail.

use serde_json::{json, Value};

use crate::mcp::protocol::ContentItem;
use crate::tools::registry::Tool;
use crate::types::Result;

/// Text of the first content item.
pub const FIRST_TEXT: &str = "This is the text description that should appear first.";

/// Text of the second content item.
pub const SECOND_TEXT: &str = "This is the text description that should appear second.";

/// Zero-argument tool returning the fixed ordered pair of text items.
#[derive(Debug, Default, Clone, Copy)]
pub struct GetContent;

impl Tool for GetContent {
    fn name(&self) -> &str {
        "get_content"
    }

    fn description(&self) -> &str {
        "Return two text samples. OpenAI will only see the first one."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {},
            "additionalProperties": false,
        })
    }

    fn call(&self, _arguments: &Value) -> Result<Vec<ContentItem>> {
        Ok(vec![
            ContentItem::text(FIRST_TEXT),
            ContentItem::text(SECOND_TEXT),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_returns_exactly_two_items_in_order() {
        let content = GetContent.call(&json!({})).unwrap();
        assert_eq!(content.len(), 2);
        assert_eq!(content[0], ContentItem::text(FIRST_TEXT));
        assert_eq!(content[1], ContentItem::text(SECOND_TEXT));
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let first = GetContent.call(&json!({})).unwrap();
        let second = GetContent.call(&json!({})).unwrap();
        assert_eq!(first, second);

        let a = serde_json::to_string(&first).unwrap();
        let b = serde_json::to_string(&second).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_arguments_are_ignored() {
        let with_junk = GetContent.call(&json!({"unexpected": 42})).unwrap();
        let without = GetContent.call(&json!({})).unwrap();
        assert_eq!(with_junk, without);
    }

    #[test]
    fn test_wire_shape() {
        let content = GetContent.call(&json!({})).unwrap();
        let json = serde_json::to_value(&content).unwrap();
        assert_eq!(
            json,
            json!([
                {"type": "text", "text": FIRST_TEXT},
                {"type": "text", "text": SECOND_TEXT},
            ])
        );
    }

    #[test]
    fn test_schema_declares_no_parameters() {
        let schema = GetContent.input_schema();
        assert_eq!(schema["type"], "object");
        assert!(schema["properties"].as_object().unwrap().is_empty());
    }
}
