//! Special-character removal and whitespace normalization.

use once_cell::sync::Lazy;
use regex::Regex;

// Regex patterns compiled once at startup
static SPACE_RUN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").unwrap());

static NEWLINE_RUN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// ASCII substitutions for common typographic characters
const SUBSTITUTIONS: &[(char, &str)] = &[
    ('\u{2018}', "'"),   // Left single quote
    ('\u{2019}', "'"),   // Right single quote
    ('\u{201C}', "\""),  // Left double quote
    ('\u{201D}', "\""),  // Right double quote
    ('\u{2013}', "-"),   // En dash
    ('\u{2014}', "-"),   // Em dash
    ('\u{2026}', "..."), // Ellipsis
];

/// Check for C0/C1 control characters that carry no text content.
///
/// Tab, newline, and carriage return are kept; they are handled by
/// the whitespace pass.
fn is_stripped_control(c: char) -> bool {
    matches!(c as u32, 0x00..=0x08 | 0x0B..=0x0C | 0x0E..=0x1F | 0x7F..=0x9F)
}

/// Strip control characters and replace typographic punctuation
/// with ASCII equivalents.
pub fn remove_special_chars(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if is_stripped_control(c) {
            continue;
        }
        match SUBSTITUTIONS.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => out.push_str(to),
            None => out.push(c),
        }
    }
    out
}

/// Normalize whitespace: collapse space runs to one, cap blank
/// lines at one (two consecutive newlines), trim the ends.
pub fn clean_whitespace(text: &str) -> String {
    let text = SPACE_RUN_PATTERN.replace_all(text, " ");
    let text = NEWLINE_RUN_PATTERN.replace_all(&text, "\n\n");
    text.trim().to_string()
}
