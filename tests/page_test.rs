//! Integration tests for page payload dispatch.

use richblocks::model::Block;
use richblocks::page::{SectionKind, parse_page, parse_page_str};
use richblocks::parse_features;
use serde_json::json;

const PAGE: &str = r#"{
  "data": {
    "sections": [
      {"__component": "sections.hero-section", "title": "Grow faster", "subtitle": ""},
      {"__component": "sections.about-agency", "content": "<p>Founded in 2015</p>"},
      {"__component": "sections.legacy-banner", "text": "gone"},
      {"__component": "sections.pricing-plans", "plans": [
        {"name": "Starter", "features": "Landing page\nHosting\n\n"},
        {"name": "Growth", "features": [
          {"type": "paragraph", "children": [{"type": "text", "text": "SEO audit"}]},
          {"feature": "Analytics"}
        ]}
      ]},
      {"__component": "sections.faq", "description": [
        {"type": "paragraph", "children": [{"type": "text", "text": "  "}]},
        {"type": "heading", "level": 9, "children": [{"type": "text", "text": "Questions"}]}
      ]}
    ]
  }
}"#;

#[test]
fn test_page_sections_in_order() {
    let page = parse_page_str(PAGE).unwrap();
    let kinds: Vec<SectionKind> = page.sections.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SectionKind::Hero,
            SectionKind::About,
            SectionKind::Pricing,
            SectionKind::Faq
        ]
    );
}

#[test]
fn test_section_fields() {
    let page = parse_page_str(PAGE).unwrap();

    let hero = page.section("hero-section").unwrap();
    assert_eq!(hero.text_or("title", "Welcome"), "Grow faster");
    assert_eq!(hero.text_or("subtitle", "We build brands"), "We build brands");

    let about = page.section("about-agency").unwrap();
    assert_eq!(
        about.render_field("content"),
        richblocks::Rendered::Literal("<p>Founded in 2015</p>".into())
    );

    let faq = page.section("faq").unwrap();
    assert_eq!(
        faq.render_field("description").blocks(),
        &[Block::Heading {
            level: 3,
            content: vec![richblocks::Inline::Text("Questions".into())],
        }]
    );
}

#[test]
fn test_pricing_features() {
    let page = parse_page_str(PAGE).unwrap();
    let pricing = page.section("pricing-plans").unwrap();
    let plans = pricing.field("plans").and_then(|p| p.as_array()).unwrap();

    assert_eq!(
        parse_features(&plans[0]["features"]),
        vec!["Landing page".to_string(), "Hosting".to_string()]
    );
    assert_eq!(
        parse_features(&plans[1]["features"]),
        vec!["SEO audit".to_string(), "Analytics".to_string()]
    );
}

#[test]
fn test_empty_page_means_maintenance() {
    assert!(parse_page(&json!({"data": {"sections": []}})).is_empty());
    assert!(parse_page(&json!(null)).is_empty());
    assert!(parse_page_str("{not json").is_err());
}
