//! HTML Synthesizer - converts rendered blocks to HTML markup.
//!
//! Text is escaped; legacy literal content is emitted raw because it is
//! already markup.
//!
//! # Example
//!
//! ```
//! use richblocks::export::{HtmlConfig, synthesize_html};
//! use richblocks::model::{Block, Inline, Rendered};
//!
//! let rendered = Rendered::Blocks(vec![Block::Paragraph(vec![Inline::Text("a < b".into())])]);
//! let html = synthesize_html(&rendered, &HtmlConfig::default());
//! assert_eq!(html, "<p>a &lt; b</p>\n");
//! ```

use std::borrow::Cow;
use std::fmt::Write;

use crate::markdown::SlugRegistry;
use crate::model::{Block, Inline, ListFormat, Rendered, inline_text};

/// Configuration for HTML output.
#[derive(Debug, Clone)]
pub struct HtmlConfig {
    /// Wrap the output in `<div class="…">`.
    pub wrapper_class: Option<String>,
    /// Give each heading an `id` derived from its text.
    pub heading_ids: bool,
    /// Put block elements on their own indented lines.
    pub pretty: bool,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            wrapper_class: None,
            heading_ids: false,
            pretty: true,
        }
    }
}

/// Context for the synthesis walk.
struct SynthesisContext<'a> {
    out: String,
    config: &'a HtmlConfig,
    slugs: SlugRegistry,
    indent_level: usize,
}

impl SynthesisContext<'_> {
    fn indent(&mut self) {
        if !self.config.pretty {
            return;
        }
        for _ in 0..self.indent_level {
            self.out.push_str("  ");
        }
    }

    fn newline(&mut self) {
        if self.config.pretty {
            self.out.push('\n');
        }
    }
}

/// Synthesize HTML from rendered output.
pub fn synthesize_html(rendered: &Rendered, config: &HtmlConfig) -> String {
    let mut ctx = SynthesisContext {
        out: String::new(),
        config,
        slugs: SlugRegistry::new(),
        indent_level: 0,
    };

    if let Some(class) = &config.wrapper_class {
        write!(ctx.out, "<div class=\"{}\">", escape_xml(class)).unwrap();
        ctx.newline();
        ctx.indent_level += 1;
    }

    match rendered {
        Rendered::Blocks(blocks) => {
            for block in blocks {
                write_block(block, &mut ctx);
            }
        }
        Rendered::Literal(markup) => {
            ctx.indent();
            ctx.out.push_str(markup);
            ctx.newline();
        }
    }

    if config.wrapper_class.is_some() {
        ctx.indent_level -= 1;
        ctx.out.push_str("</div>");
        ctx.newline();
    }

    ctx.out
}

fn write_block(block: &Block, ctx: &mut SynthesisContext) {
    match block {
        Block::Paragraph(content) => write_simple_block("p", content, ctx),
        Block::Generic(content) => write_simple_block("div", content, ctx),

        Block::Heading { level, content } => {
            ctx.indent();
            if ctx.config.heading_ids {
                let slug = ctx.slugs.slug_for(&inline_text(content));
                write!(ctx.out, "<h{} id=\"{}\">", level, escape_xml(&slug)).unwrap();
            } else {
                write!(ctx.out, "<h{}>", level).unwrap();
            }
            write_inlines(content, ctx);
            write!(ctx.out, "</h{}>", level).unwrap();
            ctx.newline();
        }

        Block::List { format, items } => {
            let tag = match format {
                ListFormat::Ordered => "ol",
                ListFormat::Unordered => "ul",
            };
            write_list(tag, items.iter().map(Vec::as_slice), ctx);
        }

        // A bare item still needs a list parent to be valid markup
        Block::ListItem(content) => write_list("ul", std::iter::once(content.as_slice()), ctx),
    }
}

fn write_simple_block(tag: &str, content: &[Inline], ctx: &mut SynthesisContext) {
    ctx.indent();
    write!(ctx.out, "<{}>", tag).unwrap();
    write_inlines(content, ctx);
    write!(ctx.out, "</{}>", tag).unwrap();
    ctx.newline();
}

fn write_list<'i>(
    tag: &str,
    items: impl ExactSizeIterator<Item = &'i [Inline]>,
    ctx: &mut SynthesisContext,
) {
    ctx.indent();
    let has_children = items.len() > 0;
    write!(ctx.out, "<{}>", tag).unwrap();
    if has_children {
        ctx.newline();
        ctx.indent_level += 1;
    }

    for item in items {
        write_simple_block("li", item, ctx);
    }

    if has_children {
        ctx.indent_level -= 1;
        ctx.indent();
    }
    write!(ctx.out, "</{}>", tag).unwrap();
    ctx.newline();
}

fn write_inlines(inlines: &[Inline], ctx: &mut SynthesisContext) {
    for inline in inlines {
        write_inline(inline, ctx);
    }
}

fn write_inline(inline: &Inline, ctx: &mut SynthesisContext) {
    let tag = match inline {
        Inline::Text(text) => {
            ctx.out.push_str(&escape_xml(text));
            return;
        }
        Inline::Strong(_) => "strong",
        Inline::Emphasis(_) => "em",
        Inline::Underline(_) => "u",
        Inline::Code(_) => "code",
        Inline::Span(_) => "span",
    };
    write!(ctx.out, "<{}>", tag).unwrap();
    write_inlines(inline.children(), ctx);
    write!(ctx.out, "</{}>", tag).unwrap();
}

/// Escape special XML/HTML characters.
pub fn escape_xml(s: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Inline {
        Inline::Text(s.to_string())
    }

    fn html(blocks: Vec<Block>) -> String {
        synthesize_html(&Rendered::Blocks(blocks), &HtmlConfig::default())
    }

    #[test]
    fn test_synthesize_simple_paragraph() {
        let result = html(vec![Block::Paragraph(vec![text("Hello, World!")])]);
        assert_eq!(result, "<p>Hello, World!</p>\n");
    }

    #[test]
    fn test_synthesize_marks() {
        let result = html(vec![Block::Paragraph(vec![Inline::Strong(vec![
            Inline::Emphasis(vec![Inline::Underline(vec![Inline::Code(vec![text("X")])])]),
        ])])]);
        assert_eq!(result, "<p><strong><em><u><code>X</code></u></em></strong></p>\n");
    }

    #[test]
    fn test_synthesize_nested_list() {
        let result = html(vec![Block::List {
            format: ListFormat::Ordered,
            items: vec![vec![text("Item 1")], vec![]],
        }]);
        assert_eq!(result, "<ol>\n  <li>Item 1</li>\n  <li></li>\n</ol>\n");
    }

    #[test]
    fn test_empty_list_has_no_inner_newline() {
        let result = html(vec![Block::List {
            format: ListFormat::Unordered,
            items: vec![],
        }]);
        assert_eq!(result, "<ul></ul>\n");
    }

    #[test]
    fn test_bare_list_item_gets_list_parent() {
        let result = html(vec![Block::ListItem(vec![text("solo")])]);
        assert_eq!(result, "<ul>\n  <li>solo</li>\n</ul>\n");
    }

    #[test]
    fn test_heading_levels_and_ids() {
        let config = HtmlConfig {
            heading_ids: true,
            ..Default::default()
        };
        let rendered = Rendered::Blocks(vec![
            Block::Heading {
                level: 1,
                content: vec![text("Our Team")],
            },
            Block::Heading {
                level: 6,
                content: vec![text("Our Team")],
            },
        ]);
        let result = synthesize_html(&rendered, &config);
        assert!(result.contains(r#"<h1 id="our-team">Our Team</h1>"#));
        assert!(result.contains(r#"<h6 id="our-team-1">Our Team</h6>"#));
    }

    #[test]
    fn test_wrapper_and_literal_passthrough() {
        let config = HtmlConfig {
            wrapper_class: Some("rich-text".to_string()),
            ..Default::default()
        };
        let result = synthesize_html(&Rendered::Literal("<b>raw</b>".into()), &config);
        assert_eq!(result, "<div class=\"rich-text\">\n  <b>raw</b>\n</div>\n");
    }

    #[test]
    fn test_compact_output() {
        let config = HtmlConfig {
            pretty: false,
            ..Default::default()
        };
        let rendered = Rendered::Blocks(vec![
            Block::Generic(vec![text("a")]),
            Block::List {
                format: ListFormat::Unordered,
                items: vec![vec![text("b")]],
            },
        ]);
        assert_eq!(
            synthesize_html(&rendered, &config),
            "<div>a</div><ul><li>b</li></ul>"
        );
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("Hello"), "Hello");
        assert_eq!(escape_xml("<script>"), "&lt;script&gt;");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml(r#"Say "hi""#), "Say &quot;hi&quot;");
    }
}
