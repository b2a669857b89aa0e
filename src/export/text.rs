//! Plain text extraction.
//!
//! Used for card descriptions, meta tags and search snippets where only the
//! words matter: formatting is dropped, each block becomes one line, and
//! each list item becomes its own line.

use std::io::{self, Write};

use crate::model::{Block, ListFormat, Rendered, inline_text};

use super::Exporter;

/// Configuration for plain text output.
#[derive(Debug, Clone)]
pub struct TextConfig {
    /// Prefix list items with `- ` or `N. `.
    pub list_markers: bool,
    /// Inserted between lines.
    pub separator: String,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            list_markers: false,
            separator: "\n".to_string(),
        }
    }
}

/// Exporter for plain text output.
#[derive(Debug, Clone, Default)]
pub struct TextExporter {
    config: TextConfig,
}

impl TextExporter {
    /// Create a new TextExporter with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a TextExporter with the specified configuration.
    pub fn with_config(config: TextConfig) -> Self {
        Self { config }
    }
}

impl Exporter for TextExporter {
    fn export<W: Write>(&self, rendered: &Rendered, writer: &mut W) -> io::Result<()> {
        let text = plain_text(rendered, &self.config);
        writer.write_all(text.as_bytes())?;
        if !text.is_empty() && !text.ends_with('\n') {
            writer.write_all(b"\n")?;
        }
        Ok(())
    }
}

/// Flatten rendered output to plain text lines.
///
/// Lines are trimmed. Literal content is returned verbatim.
pub fn plain_text(rendered: &Rendered, config: &TextConfig) -> String {
    let blocks = match rendered {
        Rendered::Literal(s) => return s.clone(),
        Rendered::Blocks(blocks) => blocks,
    };

    let mut lines: Vec<String> = Vec::new();
    for block in blocks {
        match block {
            Block::Paragraph(content)
            | Block::Heading { content, .. }
            | Block::Generic(content) => {
                lines.push(inline_text(content).trim().to_string());
            }
            Block::List { format, items } => {
                for (i, item) in items.iter().enumerate() {
                    let marker = match (config.list_markers, format) {
                        (false, _) => String::new(),
                        (true, ListFormat::Ordered) => format!("{}. ", i + 1),
                        (true, ListFormat::Unordered) => "- ".to_string(),
                    };
                    lines.push(format!("{}{}", marker, inline_text(item).trim()));
                }
            }
            Block::ListItem(content) => {
                let marker = if config.list_markers { "- " } else { "" };
                lines.push(format!("{}{}", marker, inline_text(content).trim()));
            }
        }
    }

    lines.join(&config.separator)
}
