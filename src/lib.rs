//! # richblocks
//!
//! A small, total renderer for CMS rich-text "blocks" documents.
//!
//! ## Features
//!
//! - Normalise loosely-typed CMS JSON into a typed node tree, never failing
//! - Render paragraphs, headings, lists and marked text into structured blocks
//! - Suppress blank paragraphs, clamp heading levels, keep sibling order
//! - Pass legacy pre-rendered strings through untouched
//! - Export to HTML, Markdown, plain text or JSON
//!
//! ## Quick Start
//!
//! ```
//! use richblocks::{parse_rich_text, render, synthesize_html, HtmlConfig};
//! use serde_json::json;
//!
//! let field = json!([
//!     {"type": "heading", "level": 2, "children": [{"type": "text", "text": "Our Work", "bold": true}]},
//!     {"type": "paragraph", "children": [{"type": "text", "text": "   "}]},
//!     {"type": "list", "format": "ordered", "children": [
//!         {"type": "list-item", "children": [{"type": "text", "text": "Step One"}]}
//!     ]}
//! ]);
//!
//! let rendered = render(&parse_rich_text(&field));
//! assert_eq!(rendered.blocks().len(), 2);
//!
//! let html = synthesize_html(&rendered, &HtmlConfig::default());
//! assert!(html.starts_with("<h2><strong>Our Work</strong></h2>"));
//! ```
//!
//! ## Pages
//!
//! Whole page payloads are dispatched section by section through
//! [`page::parse_page`]; rich-text fields of a section render with
//! [`page::Section::render_field`].

pub mod error;
pub mod export;
pub mod import;
pub mod markdown;
pub mod model;
pub mod page;
pub mod render;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Error, Result};
pub use export::{
    Exporter, Format, HtmlConfig, HtmlExporter, JsonExporter, MarkdownExporter, TextConfig,
    TextExporter, export_to_path, plain_text, synthesize_html,
};
pub use import::{parse_features, parse_rich_text, parse_rich_text_str};
pub use markdown::{MarkdownConfig, render_markdown};
pub use model::{Block, Inline, ListFormat, Marks, Node, Rendered, RichText, TextLeaf};
pub use page::{Page, Section, SectionKind, parse_page, parse_page_str};
pub use render::{render, render_nodes};
