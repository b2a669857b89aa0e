//! Core rich text → block rendering.
//!
//! A depth-first walk over the node tree with one case per node kind. The
//! walk is pure and total: no input makes it fail, a bad node just renders
//! nothing and its siblings carry on.
//!
//! Per-kind behaviour:
//!
//! - **text**: marks wrap the text in a fixed order, bold outermost and code
//!   innermost
//! - **paragraph**: suppressed when all descendant text is blank after
//!   trimming
//! - **heading**: levels outside 1..=6 (or missing) fall back to 3
//! - **list**: one item per child, empty items included
//! - **unknown**: a generic block around the children, or nothing when there
//!   are none

use crate::model::{Block, Inline, ListFormat, Marks, Node, Rendered, RichText, TextLeaf};


/// Heading level used when the source level is missing or out of range.
pub const DEFAULT_HEADING_LEVEL: u8 = 3;

/// Render rich text in either of its input shapes.
///
/// Literal strings are passed through unchanged; node trees are walked.
///
/// # Example
///
/// ```
/// use richblocks::model::{Block, Inline, Node, Rendered, RichText};
/// use richblocks::render::render;
///
/// let content = RichText::Blocks(vec![Node::paragraph(vec![Node::text("Hello")])]);
/// assert_eq!(
///     render(&content),
///     Rendered::Blocks(vec![Block::Paragraph(vec![Inline::Text("Hello".into())])])
/// );
/// assert_eq!(render(&"<p>Hi</p>".into()), Rendered::Literal("<p>Hi</p>".into()));
/// ```
pub fn render(content: &RichText) -> Rendered {
    match content {
        RichText::Blocks(nodes) => Rendered::Blocks(render_nodes(nodes)),
        RichText::Literal(s) => Rendered::Literal(s.clone()),
    }
}

/// Render a sequence of top-level nodes into blocks, in input order.
pub fn render_nodes(nodes: &[Node]) -> Vec<Block> {
    nodes.iter().filter_map(render_block).collect()
}

/// Render one top-level node. `None` means the node is suppressed.
pub fn render_block(node: &Node) -> Option<Block> {
    match node {
        Node::Paragraph { children } => {
            if is_blank(node) {
                tracing::debug!(children = children.len(), "suppressing blank paragraph");
                return None;
            }
            Some(Block::Paragraph(render_inlines(children)))
        }

        Node::Heading { level, children } => Some(Block::Heading {
            level: heading_level(*level),
            content: render_inlines(children),
        }),

        Node::List { format, children } => Some(render_list(*format, children)),

        Node::ListItem { children } => Some(Block::ListItem(render_inlines(children))),

        Node::Text(leaf) => Some(Block::Generic(vec![render_text(leaf)])),

        Node::Other { kind, children } => match children.as_deref() {
            Some(children) if !children.is_empty() => {
                Some(Block::Generic(render_inlines(children)))
            }
            _ => {
                tracing::trace!(kind = kind.as_deref(), "skipping childless node");
                None
            }
        },
    }
}

/// Clamp a raw heading level to 1..=6, falling back to
/// [`DEFAULT_HEADING_LEVEL`].
pub fn heading_level(level: Option<i64>) -> u8 {
    match level {
        Some(n @ 1..=6) => n as u8,
        _ => DEFAULT_HEADING_LEVEL,
    }
}

fn render_list(format: ListFormat, children: &[Node]) -> Block {
    let items = children.iter().map(render_list_item).collect();
    Block::List { format, items }
}

/// Items are never suppressed, even when empty.
fn render_list_item(node: &Node) -> Vec<Inline> {
    match node {
        Node::Text(leaf) => vec![render_text(leaf)],
        other => render_inlines(other.children()),
    }
}

/// Render children as inline content.
pub fn render_inlines(children: &[Node]) -> Vec<Inline> {
    children.iter().map(render_inline).collect()
}

fn render_inline(node: &Node) -> Inline {
    match node {
        Node::Text(leaf) => render_text(leaf),
        // Nested containers flatten to a generic span around their content
        container => Inline::Span(render_inlines(container.children())),
    }
}

/// Apply a leaf's marks to its text.
pub fn render_text(leaf: &TextLeaf) -> Inline {
    apply_marks(Inline::Text(leaf.text.clone()), leaf.marks)
}

/// Wrap content in the marks that are set.
///
/// Wrappers are applied innermost first (code, underline, italic, bold), so
/// the result always nests bold ⊃ italic ⊃ underline ⊃ code.
pub fn apply_marks(content: Inline, marks: Marks) -> Inline {
    let mut inline = content;
    if marks.code {
        inline = Inline::Code(vec![inline]);
    }
    if marks.underline {
        inline = Inline::Underline(vec![inline]);
    }
    if marks.italic {
        inline = Inline::Emphasis(vec![inline]);
    }
    if marks.bold {
        inline = Inline::Strong(vec![inline]);
    }
    inline
}

/// Check if a node's descendant text is empty or whitespace only.
pub fn is_blank(node: &Node) -> bool {
    node.collect_text().trim().is_empty()
}
