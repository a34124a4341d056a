//! Normalization integration tests
//!
//! Exercises the full cleaning pipeline through the public
//! Services API, including the idempotence property.

use crate::common::create_test_services;

#[test]
fn test_html_document_is_cleaned() {
    let services = create_test_services();
    let result = services.normalize_text("<p>Hello <b>world</b></p>\n\n\n\nMore", true);
    assert_eq!(result.text, "Hello world\n\nMore");
}

#[test]
fn test_metadata_reflects_cleaned_text() {
    let services = create_test_services();
    let result = services.normalize_text("<div># Heading\n\nBody text here</div>", true);

    assert!(!result.metadata.has_html);
    assert_eq!(result.metadata.word_count, 4);
    assert_eq!(result.metadata.line_count, 3);
    assert_eq!(result.metadata.estimated_reading_time_minutes, 1);
}

#[test]
fn test_urls_survive_and_are_flagged() {
    let services = create_test_services();
    let result = services.normalize_text("docs at https://example.com/guide", true);
    assert!(result.metadata.has_urls);
    assert!(result.text.contains("https://example.com/guide"));
}

#[test]
fn test_idempotence_on_messy_input() {
    let services = create_test_services();
    let raw = "<h1>Title &amp; More</h1>\r\n\n\n\nSome  **bold**\u{2019}s [link](https://a.b)\u{2026}\n```\ncode\n```\ndone";

    let once = services.normalize_text(raw, true).text;
    let twice = services.normalize_text(&once, true).text;
    assert_eq!(once, twice);
}

#[test]
fn test_determinism() {
    let services = create_test_services();
    let raw = "<p>Same  input,\u{2013}same   output</p>";
    let a = services.normalize_text(raw, true);
    let b = services.normalize_text(raw, true);
    assert_eq!(a.text, b.text);
    assert_eq!(a.metadata.character_count, b.metadata.character_count);
}

#[test]
fn test_clean_html_disabled_keeps_markup() {
    let services = create_test_services();
    let result = services.normalize_text("<span>kept</span>", false);
    assert_eq!(result.text, "<span>kept</span>");
    assert!(result.metadata.has_html);
}

#[test]
fn test_empty_input_gives_empty_result() {
    let services = create_test_services();
    let result = services.normalize_text("", true);
    assert!(result.text.is_empty());
    assert_eq!(result.metadata.character_count, 0);
    assert_eq!(result.metadata.word_count, 0);
    assert_eq!(result.metadata.line_count, 0);
}

#[test]
fn test_batch_normalization_preserves_order() {
    let services = create_test_services();
    let texts = vec![
        "<p>The first document body, padded until it clears the minimum length bar.</p>"
            .to_string(),
        "<p>The second document body, also padded until it clears the minimum bar.</p>"
            .to_string(),
    ];

    let result = services.normalize_batch(&texts, false, true);
    assert_eq!(result.len(), 2);
    assert!(result[0].starts_with("The first"));
    assert!(result[1].starts_with("The second"));
}
