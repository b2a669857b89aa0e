//! WASM bindings for rendering rich text in the browser.
//!
//! Each function takes the JSON text of a rich-text field and returns the
//! rendered output. Only malformed JSON is an error; any well-formed payload
//! renders, possibly to nothing.

use wasm_bindgen::prelude::*;

use crate::export::{HtmlConfig, TextConfig, plain_text, synthesize_html};
use crate::import::parse_rich_text_str;
use crate::markdown::{MarkdownConfig, render_markdown};
use crate::model::Rendered;
use crate::render::render;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn render_json(json: &str) -> Result<Rendered, JsValue> {
    let content = parse_rich_text_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(render(&content))
}

/// Render a rich-text field to HTML.
///
/// `wrapper_class`, when given, wraps the output in a `<div>` with that class.
#[wasm_bindgen]
pub fn render_html(json: &str, wrapper_class: Option<String>) -> Result<String, JsValue> {
    let config = HtmlConfig {
        wrapper_class,
        ..Default::default()
    };
    Ok(synthesize_html(&render_json(json)?, &config))
}

/// Render a rich-text field to Markdown.
#[wasm_bindgen]
pub fn render_md(json: &str) -> Result<String, JsValue> {
    Ok(render_markdown(
        &render_json(json)?,
        &MarkdownConfig::default(),
    ))
}

/// Flatten a rich-text field to plain text, one line per block.
#[wasm_bindgen]
pub fn render_text(json: &str) -> Result<String, JsValue> {
    Ok(plain_text(&render_json(json)?, &TextConfig::default()))
}
