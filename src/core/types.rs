//! Core data types for the textprep library.
//!
//! This module defines the data structures produced by the
//! normalization and deduplication components. All types are
//! transient: created and consumed within a single call, with
//! serde derives so the embedding host can marshal them.

use serde::{Deserialize, Serialize};

/// Descriptive metadata extracted from a text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextMetadata {
    /// Total character count
    pub character_count: usize,

    /// Whitespace-delimited token count
    pub word_count: usize,

    /// Newline-delimited segment count (0 for empty text)
    pub line_count: usize,

    /// Whether any `<...>` tag pattern is present
    pub has_html: bool,

    /// Whether any `http://` or `https://` substring is present
    pub has_urls: bool,

    /// Whether any fenced or inline backtick span is present
    pub has_code: bool,

    /// Estimated reading time at 200 words per minute (always >= 1)
    pub estimated_reading_time_minutes: usize,
}

/// Normalized text paired with its metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedText {
    /// The cleaned text
    pub text: String,

    /// Metadata describing the cleaned text
    pub metadata: TextMetadata,
}

/// Result of a batch deduplication pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DedupOutcome {
    /// Surviving texts, in original relative order
    pub texts: Vec<String>,

    /// Indices into the original input that were dropped
    pub removed_indices: Vec<usize>,

    /// Number of texts in the input
    pub original_count: usize,

    /// Number of texts kept
    pub deduplicated_count: usize,
}
