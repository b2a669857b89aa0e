//! Integration tests for exporting to files and writers.

use std::fs;

use richblocks::export::{Exporter, Format, JsonExporter, MarkdownExporter, export_to_path};
use richblocks::{Error, parse_rich_text, render};
use serde_json::json;
use tempfile::TempDir;

fn sample() -> richblocks::Rendered {
    render(&parse_rich_text(&json!([
        {"type": "heading", "level": 1, "children": [{"type": "text", "text": "Pricing"}]},
        {"type": "paragraph", "children": [{"type": "text", "text": "Simple plans", "italic": true}]}
    ])))
}

#[test]
fn test_export_to_path_each_format() {
    let dir = TempDir::new().unwrap();

    let cases = [
        ("out.html", "<h1>Pricing</h1>\n<p><em>Simple plans</em></p>\n"),
        ("out.md", "# Pricing\n\n*Simple plans*\n"),
        ("out.txt", "Pricing\nSimple plans\n"),
    ];
    for (name, expected) in cases {
        let path = dir.path().join(name);
        let format = Format::from_path(&path).unwrap();
        export_to_path(&sample(), format, &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), expected, "{name}");
    }
}

#[test]
fn test_export_json_round_trips_through_serde() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.json");
    export_to_path(&sample(), Format::Json, &path).unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value[0]["heading"]["level"], json!(1));
    assert_eq!(
        value[1]["paragraph"][0]["emphasis"][0]["text"],
        json!("Simple plans")
    );
}

#[test]
fn test_export_to_missing_directory_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("out.html");
    let result = export_to_path(&sample(), Format::Html, &path);
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_exporters_write_to_vec() {
    let mut md = Vec::new();
    MarkdownExporter::new().export(&sample(), &mut md).unwrap();
    assert!(String::from_utf8(md).unwrap().starts_with("# Pricing"));

    let mut compact = Vec::new();
    JsonExporter::new().export(&sample(), &mut compact).unwrap();
    let text = String::from_utf8(compact).unwrap();
    assert_eq!(text.lines().count(), 1);
}
