//! Page payloads and section dispatch.
//!
//! A page is an ordered list of sections, each tagged with a CMS component
//! name such as `sections.hero-section`. This module maps the tags onto
//! [`SectionKind`] and gives typed access to section fields; rich-text
//! fields go through [`crate::import`] and [`crate::render`].
//!
//! # Example
//!
//! ```
//! use richblocks::page::{SectionKind, parse_page};
//! use serde_json::json;
//!
//! let page = parse_page(&json!({"data": {"sections": [
//!     {"__component": "sections.faq", "heading": "Questions"},
//!     {"__component": "sections.unknown-widget"}
//! ]}}));
//! assert_eq!(page.sections.len(), 1);
//! assert_eq!(page.sections[0].kind, SectionKind::Faq);
//! assert_eq!(page.sections[0].anchor, "faq");
//! ```

mod kind;

pub use kind::SectionKind;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::import::parse_rich_text;
use crate::model::{Rendered, RichText};
use crate::render::render;

/// Prefix shared by all section component tags.
pub const COMPONENT_PREFIX: &str = "sections.";

/// One dispatched page section.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub kind: SectionKind,
    /// Anchor id: the component tag without its `sections.` prefix.
    pub anchor: String,
    /// Raw section payload.
    pub data: Value,
}

impl Section {
    /// Raw field value, if present and not `null`.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.data.get(name).filter(|v| !v.is_null())
    }

    /// A string field, or `default` when it is missing or blank.
    pub fn text_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.data
            .get(name)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(default)
    }

    /// Parse a field as rich text. Missing fields are empty.
    pub fn rich_text(&self, name: &str) -> RichText {
        self.data
            .get(name)
            .map(parse_rich_text)
            .unwrap_or_default()
    }

    /// Parse and render a rich-text field.
    pub fn render_field(&self, name: &str) -> Rendered {
        render(&self.rich_text(name))
    }

    /// Like [`Section::render_field`], but a missing field is an error.
    pub fn try_render_field(&self, name: &str) -> Result<Rendered> {
        if self.field(name).is_none() {
            return Err(Error::MissingField {
                section: self.anchor.clone(),
                field: name.to_string(),
            });
        }
        Ok(self.render_field(name))
    }
}

/// A parsed page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub sections: Vec<Section>,
}

impl Page {
    /// Check if the page has no renderable sections.
    ///
    /// Callers show a maintenance notice instead of an empty page.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Find the first section with the given anchor.
    pub fn section(&self, anchor: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.anchor == anchor)
    }

    /// Like [`Page::section`], but a missing section is an error.
    pub fn require_section(&self, anchor: &str) -> Result<&Section> {
        self.section(anchor)
            .ok_or_else(|| Error::SectionNotFound(anchor.to_string()))
    }

    /// Sections of one kind, in page order.
    pub fn sections_of(&self, kind: SectionKind) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(move |s| s.kind == kind)
    }
}

/// Parse a page payload.
///
/// Accepts `{"data": {"sections": [...]}}`, `{"sections": [...]}` or a bare
/// array. Non-object entries and unknown component tags are skipped; the
/// rest keep their order.
pub fn parse_page(value: &Value) -> Page {
    let items = value
        .pointer("/data/sections")
        .or_else(|| value.get("sections"))
        .unwrap_or(value)
        .as_array()
        .map(Vec::as_slice)
        .unwrap_or(&[]);

    let sections: Vec<Section> = items.iter().filter_map(parse_section).collect();
    tracing::debug!(
        received = items.len(),
        dispatched = sections.len(),
        "parsed page sections"
    );
    Page { sections }
}

/// Parse JSON text into a page.
pub fn parse_page_str(json: &str) -> Result<Page> {
    let value: Value = serde_json::from_str(json)?;
    Ok(parse_page(&value))
}

fn parse_section(value: &Value) -> Option<Section> {
    if !value.is_object() {
        tracing::debug!("skipping non-object section");
        return None;
    }

    let component = value.get("__component").and_then(Value::as_str)?;
    let Some(kind) = SectionKind::from_component(component) else {
        tracing::debug!(component, "skipping unknown section component");
        return None;
    };

    Some(Section {
        kind,
        anchor: component
            .strip_prefix(COMPONENT_PREFIX)
            .unwrap_or(component)
            .to_string(),
        data: value.clone(),
    })
}
