//! Markdown syntax removal.
//!
//! Strips formatting while preserving content: link and emphasis
//! text survive, image syntax and fenced code blocks are deleted,
//! inline code spans are unwrapped. Images are handled before
//! links so `![alt](url)` is removed whole instead of degrading
//! into `!alt`.

use once_cell::sync::Lazy;
use regex::Regex;

// Regex patterns compiled once at startup
static IMAGE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[[^\]]*\]\([^)]+\)").unwrap());

static LINK_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap());

static HEADING_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#+\s+").unwrap());

static EMPHASIS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[*_]{1,3}([^*_]+)[*_]{1,3}").unwrap());

static FENCE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"```[^`]*```").unwrap());

static INLINE_CODE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").unwrap());

static CODE_SPAN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"```|`[^`]+`").unwrap());

/// Strip markdown formatting, keeping readable content.
pub fn clean_markdown(text: &str) -> String {
    let text = IMAGE_PATTERN.replace_all(text, "");
    let text = LINK_PATTERN.replace_all(&text, "$1");
    let text = HEADING_PATTERN.replace_all(&text, "");
    let text = EMPHASIS_PATTERN.replace_all(&text, "$1");
    let text = FENCE_PATTERN.replace_all(&text, "");
    INLINE_CODE_PATTERN.replace_all(&text, "$1").into_owned()
}

/// Check whether any fenced or inline backtick span is present.
pub fn contains_code(text: &str) -> bool {
    CODE_SPAN_PATTERN.is_match(text)
}
