//! Rendered blocks → Markdown.
//!
//! Pure string building; the export layer handles writers and files.

use crate::model::{Block, Inline, ListFormat, Rendered, inline_text};

use super::escape::{calculate_inline_code_ticks, escape_block_start, escape_markdown};
use super::slugify::SlugRegistry;

/// Configuration for Markdown rendering.
#[derive(Debug, Clone)]
pub struct MarkdownConfig {
    /// Bullet for unordered lists (`-`, `*` or `+`).
    pub bullet: char,
    /// Emit an `<a id="…"></a>` anchor line before each heading.
    pub heading_anchors: bool,
    /// Number of the first item in an ordered list.
    pub start: usize,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            bullet: '-',
            heading_anchors: false,
            start: 1,
        }
    }
}

/// Context for rendering (pure string accumulation, no I/O).
struct RenderContext<'a> {
    config: &'a MarkdownConfig,
    output: String,
    slugs: SlugRegistry,
    /// Nothing but a list marker has been written for the current block.
    at_block_start: bool,
}

impl<'a> RenderContext<'a> {
    fn new(config: &'a MarkdownConfig) -> Self {
        Self {
            config,
            output: String::new(),
            slugs: SlugRegistry::new(),
            at_block_start: false,
        }
    }

    fn render(mut self, blocks: &[Block]) -> String {
        for (i, block) in blocks.iter().enumerate() {
            if i > 0 {
                self.output.push_str("\n\n");
            }
            self.write_block(block);
        }

        // Ensure final newline
        if !self.output.is_empty() {
            self.output.push('\n');
        }
        self.output
    }

    fn write_block(&mut self, block: &Block) {
        match block {
            Block::Paragraph(content) | Block::Generic(content) => {
                self.write_block_inlines(content);
            }

            Block::Heading { level, content } => {
                if self.config.heading_anchors {
                    let slug = self.slugs.slug_for(&inline_text(content));
                    self.output.push_str(&format!("<a id=\"{}\"></a>\n", slug));
                }
                for _ in 0..*level {
                    self.output.push('#');
                }
                self.output.push(' ');
                self.write_inlines(content);
            }

            Block::List { format, items } => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.output.push('\n');
                    }
                    match format {
                        ListFormat::Ordered => self
                            .output
                            .push_str(&format!("{}. ", self.config.start + i)),
                        ListFormat::Unordered => self.write_bullet(),
                    }
                    self.write_block_inlines(item);
                }
            }

            Block::ListItem(content) => {
                self.write_bullet();
                self.write_block_inlines(content);
            }
        }
    }

    fn write_bullet(&mut self) {
        self.output.push(self.config.bullet);
        self.output.push(' ');
    }

    /// Write inlines that open a block, where leading text could be read
    /// as a list marker.
    fn write_block_inlines(&mut self, inlines: &[Inline]) {
        self.at_block_start = true;
        self.write_inlines(inlines);
        self.at_block_start = false;
    }

    fn write_inlines(&mut self, inlines: &[Inline]) {
        for inline in inlines {
            self.write_inline(inline);
        }
    }

    fn write_inline(&mut self, inline: &Inline) {
        let (open, close) = match inline {
            Inline::Text(text) => {
                self.write_text(text);
                return;
            }
            Inline::Code(children) => {
                self.at_block_start = false;
                self.write_code(&inline_text(children));
                return;
            }
            Inline::Span(children) => {
                self.write_inlines(children);
                return;
            }
            Inline::Strong(_) => ("**", "**"),
            Inline::Emphasis(_) => ("*", "*"),
            Inline::Underline(_) => ("<u>", "</u>"),
        };

        let children = inline.children();
        // Delimiters around blank content would render literally
        if inline_text(children).trim().is_empty() {
            self.write_inlines(children);
            return;
        }

        // Render inside a scratch region so edge whitespace can move
        // outside the delimiters
        let at_start = self.at_block_start;
        self.at_block_start = false;
        let mark = self.output.len();
        self.write_inlines(children);
        let inner = self.output.split_off(mark);
        let body = inner.trim_matches(' ');

        if inner.starts_with(' ') && !at_start {
            self.output.push(' ');
        }
        self.output.push_str(open);
        self.output.push_str(body);
        self.output.push_str(close);
        if inner.ends_with(' ') {
            self.output.push(' ');
        }
    }

    fn write_code(&mut self, content: &str) {
        if content.is_empty() {
            return;
        }
        let tick_count = calculate_inline_code_ticks(content);
        let ticks: String = std::iter::repeat_n('`', tick_count).collect();

        let spacer = if content.starts_with('`') || content.ends_with('`') {
            " "
        } else {
            ""
        };

        self.output
            .push_str(&format!("{}{}{}{}{}", ticks, spacer, content, spacer, ticks));
    }

    fn write_text(&mut self, text: &str) {
        // Normalize internal whitespace while preserving leading/trailing
        let has_leading = text.starts_with(char::is_whitespace);
        let has_trailing = text.ends_with(char::is_whitespace);

        let words: Vec<&str> = text.split_whitespace().collect();
        if words.is_empty() {
            if !text.is_empty() && !self.at_block_start {
                self.output.push(' ');
            }
            return;
        }

        if has_leading && !self.at_block_start {
            self.output.push(' ');
        }

        let escaped = escape_markdown(&words.join(" "));
        if self.at_block_start {
            self.output.push_str(&escape_block_start(&escaped));
            self.at_block_start = false;
        } else {
            self.output.push_str(&escaped);
        }

        if has_trailing {
            self.output.push(' ');
        }
    }
}

/// Render to Markdown.
///
/// Blocks are separated by a blank line and the result ends with a newline.
/// Literal content is returned as-is.
pub fn render_markdown(rendered: &Rendered, config: &MarkdownConfig) -> String {
    match rendered {
        Rendered::Blocks(blocks) => RenderContext::new(config).render(blocks),
        Rendered::Literal(s) => s.clone(),
    }
}
