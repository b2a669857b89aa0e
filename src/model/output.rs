//! Rendered output types.
//!
//! The renderer produces a small structured tree rather than markup. The
//! export layer turns it into HTML, Markdown, plain text or JSON.

use serde::Serialize;

use super::node::ListFormat;

/// Inline content inside a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Inline {
    /// Literal text.
    Text(String),
    Strong(Vec<Inline>),
    Emphasis(Vec<Inline>),
    Underline(Vec<Inline>),
    Code(Vec<Inline>),
    /// Generic inline wrapper for a nested container.
    Span(Vec<Inline>),
}

impl Inline {
    /// Children of a wrapper; empty for text.
    pub fn children(&self) -> &[Inline] {
        match self {
            Inline::Text(_) => &[],
            Inline::Strong(c)
            | Inline::Emphasis(c)
            | Inline::Underline(c)
            | Inline::Code(c)
            | Inline::Span(c) => c,
        }
    }
}

/// Collect the text of a run of inlines, ignoring formatting.
pub fn inline_text(inlines: &[Inline]) -> String {
    let mut result = String::new();
    push_inline_text(inlines, &mut result);
    result
}

fn push_inline_text(inlines: &[Inline], result: &mut String) {
    for inline in inlines {
        match inline {
            Inline::Text(s) => result.push_str(s),
            other => push_inline_text(other.children(), result),
        }
    }
}

/// A rendered block element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Block {
    Paragraph(Vec<Inline>),
    /// Heading with a level already clamped to 1..=6.
    Heading { level: u8, content: Vec<Inline> },
    List {
        format: ListFormat,
        items: Vec<Vec<Inline>>,
    },
    /// A list item that appeared outside any list.
    ListItem(Vec<Inline>),
    /// Content of an unrecognised node kind.
    Generic(Vec<Inline>),
}

impl Block {
    /// Text content of the block, ignoring formatting. List items are
    /// concatenated without separators.
    pub fn text(&self) -> String {
        match self {
            Block::Paragraph(c)
            | Block::Heading { content: c, .. }
            | Block::ListItem(c)
            | Block::Generic(c) => inline_text(c),
            Block::List { items, .. } => items.iter().map(|i| inline_text(i)).collect(),
        }
    }
}

/// Result of rendering rich text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Rendered {
    /// One block per non-suppressed top-level node, in input order.
    Blocks(Vec<Block>),
    /// Legacy pre-rendered content, unchanged.
    Literal(String),
}

impl Default for Rendered {
    fn default() -> Self {
        Rendered::Blocks(Vec::new())
    }
}

impl Rendered {
    /// Rendered blocks; empty for literal content.
    pub fn blocks(&self) -> &[Block] {
        match self {
            Rendered::Blocks(blocks) => blocks,
            Rendered::Literal(_) => &[],
        }
    }

    /// Check if nothing was produced.
    pub fn is_empty(&self) -> bool {
        match self {
            Rendered::Blocks(blocks) => blocks.is_empty(),
            Rendered::Literal(s) => s.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_text_ignores_marks() {
        let inlines = vec![
            Inline::Text("a ".into()),
            Inline::Strong(vec![Inline::Emphasis(vec![Inline::Text("b".into())])]),
        ];
        assert_eq!(inline_text(&inlines), "a b");
    }

    #[test]
    fn test_serialize_shape() {
        let rendered = Rendered::Blocks(vec![
            Block::Heading {
                level: 2,
                content: vec![Inline::Strong(vec![Inline::Text("Hi".into())])],
            },
            Block::List {
                format: ListFormat::Ordered,
                items: vec![vec![Inline::Text("one".into())]],
            },
        ]);
        let json = serde_json::to_value(&rendered).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"heading": {"level": 2, "content": [{"strong": [{"text": "Hi"}]}]}},
                {"list": {"format": "ordered", "items": [[{"text": "one"}]]}}
            ])
        );
    }

    #[test]
    fn test_serialize_list_format_lowercase() {
        assert_eq!(
            serde_json::to_value(ListFormat::Unordered).unwrap(),
            serde_json::json!("unordered")
        );
        assert_eq!(
            serde_json::to_value(ListFormat::Ordered).unwrap(),
            serde_json::json!("ordered")
        );
    }

    #[test]
    fn test_serialize_literal_is_string() {
        let json = serde_json::to_value(Rendered::Literal("<b>x</b>".into())).unwrap();
        assert_eq!(json, serde_json::json!("<b>x</b>"));
    }
}
