//! Text normalization component.
//!
//! Cleans noisy document text for downstream embedding. The
//! pipeline applies fixed, ordered passes:
//!
//! 1. HTML cleaning (optional): entity decoding, tag stripping
//! 2. Markdown cleaning: links, images, headings, emphasis, code
//! 3. Special characters: control chars, typographic punctuation
//! 4. Whitespace: space runs, blank-line runs, trim
//!
//! Every pass is pure and the pipeline is idempotent: normalizing
//! already-normalized text is a no-op.

pub mod chars;
pub mod html;
pub mod markdown;

use crate::core::config::NormalizeConfig;
use crate::core::types::{NormalizedText, TextMetadata};

/// Words per minute used for the reading-time estimate
const READING_WORDS_PER_MINUTE: f64 = 200.0;

/// Text normalization component.
///
/// Holds immutable configuration and no per-call state, so a
/// single instance is safe to share across concurrent callers.
#[derive(Debug, Clone)]
pub struct Normalizer {
    config: NormalizeConfig,
}

impl Normalizer {
    /// Create a normalizer with the given configuration.
    pub fn new(config: NormalizeConfig) -> Self {
        Self { config }
    }

    /// Minimum text length (in characters) this normalizer keeps
    /// in batch operations.
    pub fn min_text_length(&self) -> usize {
        self.config.min_text_length
    }

    /// Apply all normalization passes to `text`.
    ///
    /// Empty input yields empty output. Deterministic and
    /// idempotent.
    ///
    /// # Example
    ///
    /// ```
    /// use textprep::core::config::NormalizeConfig;
    /// use textprep::core::normalize::Normalizer;
    ///
    /// let normalizer = Normalizer::new(NormalizeConfig::default());
    /// let cleaned = normalizer.normalize("<p>Hello <b>world</b></p>\n\n\n\nMore", true);
    /// assert_eq!(cleaned, "Hello world\n\nMore");
    /// ```
    pub fn normalize(&self, text: &str, clean_html_tags: bool) -> String {
        if text.is_empty() {
            return String::new();
        }

        let text = if clean_html_tags {
            html::clean_html(text)
        } else {
            text.to_string()
        };

        let text = markdown::clean_markdown(&text);
        let text = chars::remove_special_chars(&text);
        chars::clean_whitespace(&text)
    }

    /// Normalize `text` and describe the result.
    ///
    /// The metadata refers to the cleaned text, not the raw
    /// input. [`normalize`](Self::normalize) is the plain-text
    /// projection of this operation.
    pub fn normalize_with_metadata(&self, text: &str, clean_html_tags: bool) -> NormalizedText {
        let text = self.normalize(text, clean_html_tags);
        let metadata = self.extract_metadata(&text);
        NormalizedText { text, metadata }
    }

    /// Extract descriptive metadata from `text` without modifying it.
    pub fn extract_metadata(&self, text: &str) -> TextMetadata {
        let word_count = text.split_whitespace().count();
        let line_count = if text.is_empty() {
            0
        } else {
            text.split('\n').count()
        };

        TextMetadata {
            character_count: text.chars().count(),
            word_count,
            line_count,
            has_html: html::contains_tags(text),
            has_urls: text.contains("http://") || text.contains("https://"),
            has_code: markdown::contains_code(text),
            estimated_reading_time_minutes: estimated_reading_time(word_count),
        }
    }
}

/// Reading time in whole minutes, never below one.
fn estimated_reading_time(word_count: usize) -> usize {
    let minutes = (word_count as f64 / READING_WORDS_PER_MINUTE).round() as usize;
    minutes.max(1)
}
