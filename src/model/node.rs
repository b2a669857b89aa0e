//! Content node types.

use serde::Serialize;

/// Independent formatting marks on a text leaf.
///
/// Marks compose freely. The renderer applies them in a fixed order
/// (bold, italic, underline, code) no matter how the source listed them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Marks {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub code: bool,
}

impl Marks {
    /// No marks set.
    pub const NONE: Marks = Marks {
        bold: false,
        italic: false,
        underline: false,
        code: false,
    };

    /// All four marks set.
    pub const ALL: Marks = Marks {
        bold: true,
        italic: true,
        underline: true,
        code: true,
    };

    /// Check if no mark is set.
    pub fn is_plain(&self) -> bool {
        *self == Self::NONE
    }
}

/// Ordered vs unordered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListFormat {
    Ordered,
    /// Also used for a missing or unrecognised format.
    #[default]
    Unordered,
}

impl ListFormat {
    /// Map a CMS format string. Only the exact string `"ordered"` is ordered.
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("ordered") => ListFormat::Ordered,
            _ => ListFormat::Unordered,
        }
    }

    pub fn is_ordered(&self) -> bool {
        matches!(self, ListFormat::Ordered)
    }
}

/// A text leaf: raw string content plus marks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextLeaf {
    pub text: String,
    pub marks: Marks,
}

impl TextLeaf {
    /// Create an unmarked leaf.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marks: Marks::NONE,
        }
    }

    /// Create a leaf with the given marks.
    pub fn marked(text: impl Into<String>, marks: Marks) -> Self {
        Self {
            text: text.into(),
            marks,
        }
    }
}

/// One node of a CMS rich-text document.
///
/// Container variants never carry text of their own; text only lives in
/// [`Node::Text`] leaves reachable through `children`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Leaf text content.
    Text(TextLeaf),
    /// Block-level text container.
    Paragraph { children: Vec<Node> },
    /// Heading. `level` is kept as received; `None` when absent or
    /// non-numeric. Clamping happens at render time.
    Heading {
        level: Option<i64>,
        children: Vec<Node>,
    },
    /// List of `ListItem` children.
    List {
        format: ListFormat,
        children: Vec<Node>,
    },
    /// Individual list item.
    ListItem { children: Vec<Node> },
    /// Any other kind, including a missing kind. `children` is `None` when
    /// the source had no usable children array.
    Other {
        kind: Option<String>,
        children: Option<Vec<Node>>,
    },
}

impl Node {
    /// Unmarked text leaf.
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(TextLeaf::plain(text))
    }

    /// Text leaf with marks.
    pub fn marked(text: impl Into<String>, marks: Marks) -> Self {
        Node::Text(TextLeaf::marked(text, marks))
    }

    pub fn paragraph(children: Vec<Node>) -> Self {
        Node::Paragraph { children }
    }

    pub fn heading(level: i64, children: Vec<Node>) -> Self {
        Node::Heading {
            level: Some(level),
            children,
        }
    }

    pub fn list(format: ListFormat, children: Vec<Node>) -> Self {
        Node::List { format, children }
    }

    pub fn list_item(children: Vec<Node>) -> Self {
        Node::ListItem { children }
    }

    /// The node's kind name, as the CMS spells it.
    pub fn kind(&self) -> Option<&str> {
        match self {
            Node::Text(_) => Some("text"),
            Node::Paragraph { .. } => Some("paragraph"),
            Node::Heading { .. } => Some("heading"),
            Node::List { .. } => Some("list"),
            Node::ListItem { .. } => Some("list-item"),
            Node::Other { kind, .. } => kind.as_deref(),
        }
    }

    /// Children in rendering order. Text leaves and childless generic nodes
    /// return an empty slice.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Text(_) => &[],
            Node::Paragraph { children }
            | Node::Heading { children, .. }
            | Node::List { children, .. }
            | Node::ListItem { children } => children,
            Node::Other { children, .. } => children.as_deref().unwrap_or(&[]),
        }
    }

    /// Concatenate the text of every descendant leaf, depth-first.
    pub fn collect_text(&self) -> String {
        let mut result = String::new();
        collect_text_recursive(self, &mut result);
        result
    }
}

fn collect_text_recursive(node: &Node, result: &mut String) {
    if let Node::Text(leaf) = node {
        result.push_str(&leaf.text);
        return;
    }
    for child in node.children() {
        collect_text_recursive(child, result);
    }
}

/// Rich-text input in either of its two shapes.
///
/// Some CMS fields return a node tree, others an already flattened string.
/// Both are accepted permanently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RichText {
    /// Ordered top-level nodes.
    Blocks(Vec<Node>),
    /// Pre-rendered content, passed through untouched.
    Literal(String),
}

impl Default for RichText {
    fn default() -> Self {
        RichText::Blocks(Vec::new())
    }
}

impl RichText {
    /// Check if there is nothing to render.
    pub fn is_empty(&self) -> bool {
        match self {
            RichText::Blocks(nodes) => nodes.is_empty(),
            RichText::Literal(s) => s.is_empty(),
        }
    }
}

impl From<Vec<Node>> for RichText {
    fn from(nodes: Vec<Node>) -> Self {
        RichText::Blocks(nodes)
    }
}

impl From<&str> for RichText {
    fn from(s: &str) -> Self {
        RichText::Literal(s.to_string())
    }
}

impl From<String> for RichText {
    fn from(s: String) -> Self {
        RichText::Literal(s)
    }
}

impl<T: Into<RichText>> From<Option<T>> for RichText {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_format_from_name() {
        assert_eq!(ListFormat::from_name(Some("ordered")), ListFormat::Ordered);
        assert_eq!(
            ListFormat::from_name(Some("unordered")),
            ListFormat::Unordered
        );
        assert_eq!(ListFormat::from_name(Some("Ordered")), ListFormat::Unordered);
        assert_eq!(ListFormat::from_name(None), ListFormat::Unordered);
    }

    #[test]
    fn test_children_of_leaf_is_empty() {
        assert!(Node::text("hi").children().is_empty());
        let other = Node::Other {
            kind: Some("quote".into()),
            children: None,
        };
        assert!(other.children().is_empty());
    }

    #[test]
    fn test_collect_text_descends() {
        let node = Node::paragraph(vec![
            Node::text("a"),
            Node::Other {
                kind: None,
                children: Some(vec![Node::text("b"), Node::list_item(vec![Node::text("c")])]),
            },
        ]);
        assert_eq!(node.collect_text(), "abc");
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Node::list_item(vec![]).kind(), Some("list-item"));
        assert_eq!(
            Node::Other {
                kind: None,
                children: None
            }
            .kind(),
            None
        );
    }

    #[test]
    fn test_rich_text_from_option() {
        let none: Option<&str> = None;
        assert_eq!(RichText::from(none), RichText::Blocks(vec![]));
        assert_eq!(
            RichText::from(Some("x")),
            RichText::Literal("x".to_string())
        );
    }
}
