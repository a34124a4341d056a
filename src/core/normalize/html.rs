//! HTML entity decoding and tag stripping.
//!
//! Entities are decoded first so that encoded markup
//! (`&lt;b&gt;`) becomes visible to the tag pass. Tag removal is
//! a single non-greedy `<...>` pass with no nested-tag awareness;
//! malformed markup may leave residue, which is accepted behavior.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

// Regex patterns compiled once at startup
static TAG_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

static ENTITY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&(#x?[0-9a-fA-F]+|[a-zA-Z]+);").unwrap());

/// Decode HTML/XML character entities (named, decimal, and hex).
///
/// Unrecognized entities are left untouched. Returns
/// `Cow::Borrowed` when the input contains no `&` at all.
pub fn decode_entities(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }

    ENTITY_PATTERN.replace_all(text, |caps: &regex::Captures<'_>| {
        let inner = &caps[1];
        if let Some(hex) = inner.strip_prefix("#x").or_else(|| inner.strip_prefix("#X")) {
            u32::from_str_radix(hex, 16)
                .ok()
                .and_then(char::from_u32)
                .map_or_else(|| caps[0].to_string(), |c| c.to_string())
        } else if let Some(dec) = inner.strip_prefix('#') {
            dec.parse::<u32>()
                .ok()
                .and_then(char::from_u32)
                .map_or_else(|| caps[0].to_string(), |c| c.to_string())
        } else {
            match inner {
                "amp" => "&".to_string(),
                "lt" => "<".to_string(),
                "gt" => ">".to_string(),
                "quot" => "\"".to_string(),
                "apos" => "'".to_string(),
                "nbsp" => " ".to_string(),
                "mdash" => "\u{2014}".to_string(),
                "ndash" => "\u{2013}".to_string(),
                "hellip" => "\u{2026}".to_string(),
                "copy" => "\u{00A9}".to_string(),
                "reg" => "\u{00AE}".to_string(),
                "trade" => "\u{2122}".to_string(),
                _ => caps[0].to_string(),
            }
        }
    })
}

/// Remove all `<tag>` constructs.
pub fn strip_tags(text: &str) -> Cow<'_, str> {
    TAG_PATTERN.replace_all(text, "")
}

/// Full HTML cleaning pass: decode entities, then strip tags.
pub fn clean_html(text: &str) -> String {
    let decoded = decode_entities(text);
    strip_tags(&decoded).into_owned()
}

/// Check whether any `<...>` tag pattern is present.
pub fn contains_tags(text: &str) -> bool {
    TAG_PATTERN.is_match(text)
}
