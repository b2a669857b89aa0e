//! Feature-list parsing for pricing plans and service cards.
//!
//! Feature lists arrive as a newline-separated string, as an array of
//! strings, as rich-text paragraphs, or as an array of component objects
//! whose text lives under one of several field names.

use serde_json::Value;

use super::{children_of, kind_of, text_of};

/// Field names tried, in order, on a feature object.
const FEATURE_TEXT_FIELDS: &[&str] = &[
    "features",
    "text",
    "feature",
    "name",
    "title",
    "description",
    "value",
];

/// Parse a feature list into trimmed, non-empty lines.
pub fn parse_features(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) => s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
        Value::Array(items) => items.iter().filter_map(parse_feature_item).collect(),
        _ => Vec::new(),
    }
}

fn parse_feature_item(item: &Value) -> Option<String> {
    let text = match item {
        Value::String(s) => s.trim().to_string(),
        Value::Object(_) if kind_of(item) == Some("paragraph") => {
            let joined: String = children_of(item).iter().map(text_of).collect();
            joined.trim().to_string()
        }
        Value::Object(_) => {
            // The first present, non-empty field decides; anything but a
            // string there drops the item
            let field = FEATURE_TEXT_FIELDS
                .iter()
                .filter_map(|key| item.get(*key))
                .find(|v| is_truthy(v))?;
            field.as_str()?.trim().to_string()
        }
        _ => return None,
    };

    (!text.is_empty()).then_some(text)
}

/// Whether a field value counts as set: not null, false, zero or empty text.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
