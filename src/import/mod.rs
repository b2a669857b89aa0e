//! Import of raw CMS JSON into the typed node model.
//!
//! This is the only place that looks at untyped payloads. Everything here is
//! total: a malformed value degrades to "no content" instead of an error, so
//! the renderer downstream only ever sees well-formed [`Node`]s.
//!
//! # Example
//!
//! ```
//! use richblocks::import::parse_rich_text;
//! use richblocks::model::{Node, RichText};
//! use serde_json::json;
//!
//! let value = json!([{"type": "paragraph", "children": [{"type": "text", "text": "Hi"}]}]);
//! let content = parse_rich_text(&value);
//! assert_eq!(content, RichText::Blocks(vec![Node::paragraph(vec![Node::text("Hi")])]));
//! ```

mod features;

pub use features::parse_features;

use serde_json::Value;

use crate::error::Result;
use crate::model::{ListFormat, Marks, Node, RichText, TextLeaf};

/// Children of a raw node, or an empty slice if missing or malformed.
pub fn children_of(value: &Value) -> &[Value] {
    value
        .get("children")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Text of a raw text leaf, or `""` if missing or malformed.
pub fn text_of(value: &Value) -> &str {
    value.get("text").and_then(Value::as_str).unwrap_or("")
}

/// Kind discriminator of a raw node. Reads `kind`, then the CMS's `type`.
pub fn kind_of(value: &Value) -> Option<&str> {
    value
        .get("kind")
        .and_then(Value::as_str)
        .or_else(|| value.get("type").and_then(Value::as_str))
}

/// Normalise any rich-text field value.
///
/// - `null` → empty blocks
/// - string → [`RichText::Literal`]
/// - array → parsed nodes
/// - `{ "blocks": [...] }` → parsed nodes of the wrapped array
/// - anything else → empty blocks
pub fn parse_rich_text(value: &Value) -> RichText {
    match value {
        Value::Null => RichText::default(),
        Value::String(s) => RichText::Literal(s.clone()),
        Value::Array(items) => RichText::Blocks(parse_nodes(items)),
        Value::Object(map) => match map.get("blocks") {
            Some(Value::Array(items)) => RichText::Blocks(parse_nodes(items)),
            _ => {
                tracing::debug!("rich text object without blocks array; treating as empty");
                RichText::default()
            }
        },
        Value::Bool(_) | Value::Number(_) => {
            tracing::debug!(?value, "scalar rich text value; treating as empty");
            RichText::default()
        }
    }
}

/// Parse JSON text into rich text.
///
/// Only syntax errors are reported; any well-formed JSON is accepted.
pub fn parse_rich_text_str(json: &str) -> Result<RichText> {
    let value: Value = serde_json::from_str(json)?;
    Ok(parse_rich_text(&value))
}

/// Parse a sequence of raw nodes, dropping values that carry no node at all.
pub fn parse_nodes(items: &[Value]) -> Vec<Node> {
    items.iter().filter_map(parse_node).collect()
}

/// Parse one raw value into a node.
///
/// Returns `None` for `null`, numbers and booleans. Bare strings become
/// plain text leaves; nested arrays become generic containers.
pub fn parse_node(value: &Value) -> Option<Node> {
    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) => {
            tracing::trace!(?value, "dropping non-node value");
            None
        }
        Value::String(s) => Some(Node::text(s.as_str())),
        Value::Array(items) => Some(Node::Other {
            kind: None,
            children: Some(parse_nodes(items)),
        }),
        Value::Object(_) => Some(parse_object(value)),
    }
}

fn parse_object(value: &Value) -> Node {
    let children = || parse_nodes(children_of(value));

    match kind_of(value) {
        Some("text") => Node::Text(TextLeaf {
            text: text_of(value).to_string(),
            marks: parse_marks(value),
        }),
        Some("paragraph") => Node::Paragraph {
            children: children(),
        },
        Some("heading") => Node::Heading {
            level: value.get("level").and_then(parse_level),
            children: children(),
        },
        Some("list") => Node::List {
            format: ListFormat::from_name(value.get("format").and_then(Value::as_str)),
            children: children(),
        },
        Some("list-item") => Node::ListItem {
            children: children(),
        },
        kind => Node::Other {
            kind: kind.map(str::to_string),
            children: value
                .get("children")
                .and_then(Value::as_array)
                .map(|items| parse_nodes(items)),
        },
    }
}

/// A mark is set only by a literal JSON `true`.
fn parse_marks(value: &Value) -> Marks {
    let flag = |key: &str| value.get(key).and_then(Value::as_bool).unwrap_or(false);
    Marks {
        bold: flag("bold"),
        italic: flag("italic"),
        underline: flag("underline"),
        code: flag("code"),
    }
}

/// Read a heading level: an integer, an integral float, or an integer string.
fn parse_level(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
