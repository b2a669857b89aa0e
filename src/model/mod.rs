//! Core data model for rich-text rendering.
//!
//! This module contains:
//! - Content nodes as they come out of the CMS, after normalisation
//! - The dual-mode rich-text input (node tree or legacy string)
//! - Rendered blocks and inline content

mod node;
mod output;

// Re-export node types
pub use node::{ListFormat, Marks, Node, RichText, TextLeaf};

// Re-export output types
pub use output::{Block, Inline, Rendered, inline_text};
