//! Error types for richblocks operations.
//!
//! Rendering itself never fails. These errors come from the outer surfaces:
//! reading JSON text, writing output files and looking up page sections.

use thiserror::Error;

/// Errors that can occur while loading content or writing rendered output.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Section not found: {0}")]
    SectionNotFound(String),

    #[error("Section {section} has no field {field}")]
    MissingField { section: String, field: String },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;
