//! Export module for writing rendered rich text in various formats.
//!
//! Provides the `Exporter` trait and format-specific implementations.
//!
//! # Architecture
//!
//! The `Exporter` trait uses a builder pattern:
//! - `new()` creates an exporter with default configuration
//! - `with_config()` allows customization
//! - `export()` writes to any `Write` destination
//!
//! # Example
//!
//! ```
//! use richblocks::export::{Exporter, HtmlExporter};
//! use richblocks::import::parse_rich_text;
//! use richblocks::render::render;
//! use serde_json::json;
//!
//! let content = parse_rich_text(&json!([
//!     {"type": "paragraph", "children": [{"type": "text", "text": "Hi", "bold": true}]}
//! ]));
//! let mut out = Vec::new();
//! HtmlExporter::new().export(&render(&content), &mut out)?;
//! assert_eq!(String::from_utf8_lossy(&out), "<p><strong>Hi</strong></p>\n");
//! # Ok::<(), std::io::Error>(())
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::markdown::{MarkdownConfig, render_markdown};
use crate::model::Rendered;

mod html_synth;
mod text;

pub use html_synth::{HtmlConfig, escape_xml, synthesize_html};
pub use text::{TextConfig, TextExporter, plain_text};

/// Output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Html,
    Markdown,
    Text,
    Json,
}

impl Format {
    /// Parse a format name (`html`, `markdown`/`md`, `text`/`txt`, `json`).
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "html" | "htm" => Ok(Format::Html),
            "markdown" | "md" => Ok(Format::Markdown),
            "text" | "txt" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            _ => Err(Error::UnsupportedFormat(name.to_string())),
        }
    }

    /// Infer the format from a file extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::UnsupportedFormat(path.display().to_string()))?;
        Self::from_name(ext)
    }
}

/// Trait for exporting rendered rich text to specific formats.
///
/// Exporters use a builder pattern where configuration is held in the struct,
/// and the `export` method writes to any `Write` destination.
pub trait Exporter {
    /// Export the rendered content to the provided writer.
    fn export<W: Write>(&self, rendered: &Rendered, writer: &mut W) -> io::Result<()>;
}

/// Exporter for HTML output.
#[derive(Debug, Clone, Default)]
pub struct HtmlExporter {
    config: HtmlConfig,
}

impl HtmlExporter {
    /// Create a new HtmlExporter with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an HtmlExporter with the specified configuration.
    pub fn with_config(config: HtmlConfig) -> Self {
        Self { config }
    }
}

impl Exporter for HtmlExporter {
    fn export<W: Write>(&self, rendered: &Rendered, writer: &mut W) -> io::Result<()> {
        writer.write_all(synthesize_html(rendered, &self.config).as_bytes())
    }
}

/// Exporter for Markdown output.
#[derive(Debug, Clone, Default)]
pub struct MarkdownExporter {
    config: MarkdownConfig,
}

impl MarkdownExporter {
    /// Create a new MarkdownExporter with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a MarkdownExporter with the specified configuration.
    pub fn with_config(config: MarkdownConfig) -> Self {
        Self { config }
    }
}

impl Exporter for MarkdownExporter {
    fn export<W: Write>(&self, rendered: &Rendered, writer: &mut W) -> io::Result<()> {
        writer.write_all(render_markdown(rendered, &self.config).as_bytes())
    }
}

/// Exporter for the structured output model as JSON.
#[derive(Debug, Clone, Default)]
pub struct JsonExporter {
    /// Indent the output.
    pub pretty: bool,
}

impl JsonExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, rendered: &Rendered, writer: &mut W) -> io::Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, rendered)?;
        } else {
            serde_json::to_writer(&mut *writer, rendered)?;
        }
        writer.write_all(b"\n")
    }
}

/// Export with the default configuration for `format`.
pub fn export<W: Write>(rendered: &Rendered, format: Format, writer: &mut W) -> io::Result<()> {
    match format {
        Format::Html => HtmlExporter::new().export(rendered, writer),
        Format::Markdown => MarkdownExporter::new().export(rendered, writer),
        Format::Text => TextExporter::new().export(rendered, writer),
        Format::Json => JsonExporter::pretty().export(rendered, writer),
    }
}

/// Export to a file, creating or truncating it.
pub fn export_to_path(rendered: &Rendered, format: Format, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    export(rendered, format, &mut writer)?;
    writer.flush()?;
    tracing::debug!(path = %path.display(), ?format, "wrote rendered output");
    Ok(())
}
