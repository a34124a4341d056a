//! Batch deduplication component.
//!
//! Removes exact and near-duplicate texts from a batch in a
//! single pass, preserving first-seen order. Exact duplicates are
//! caught by a cheap signature (lowercased, trimmed, first 200
//! characters) before any similarity computation; survivors of
//! that filter are compared against every kept text with the
//! Ratcliff–Obershelp ratio.
//!
//! The fuzzy pass is O(k²) in the number of survivors, an
//! accepted tradeoff for the expected batch sizes.

pub mod similarity;

use std::collections::HashSet;

use crate::core::config::NormalizeConfig;
use crate::core::types::DedupOutcome;
use similarity::similarity;

/// Character length of the exact-duplicate signature prefix
const SIGNATURE_PREFIX_CHARS: usize = 200;

/// Batch deduplication component.
///
/// Holds immutable configuration and no per-call state.
#[derive(Debug, Clone)]
pub struct Deduplicator {
    config: NormalizeConfig,
}

impl Deduplicator {
    /// Create a deduplicator with the given configuration.
    pub fn new(config: NormalizeConfig) -> Self {
        Self { config }
    }

    /// Remove duplicate or highly similar texts.
    ///
    /// Walks the input in order, keeping the first occurrence of
    /// each (near-)duplicate group. Texts shorter than the
    /// configured minimum are dropped without comparison.
    ///
    /// # Example
    ///
    /// ```
    /// use textprep::core::config::NormalizeConfig;
    /// use textprep::core::dedup::Deduplicator;
    ///
    /// let dedup = Deduplicator::new(NormalizeConfig {
    ///     similarity_threshold: 0.85,
    ///     min_text_length: 5,
    /// });
    /// let texts = vec![
    ///     "completely original sentence".to_string(),
    ///     "completely original sentence".to_string(),
    /// ];
    /// let outcome = dedup.deduplicate(&texts);
    /// assert_eq!(outcome.deduplicated_count, 1);
    /// assert_eq!(outcome.removed_indices, vec![1]);
    /// ```
    pub fn deduplicate(&self, texts: &[String]) -> DedupOutcome {
        let mut kept: Vec<String> = Vec::new();
        let mut removed_indices: Vec<usize> = Vec::new();
        let mut seen_signatures: HashSet<String> = HashSet::new();

        for (idx, text) in texts.iter().enumerate() {
            // Skip very short texts
            if text.chars().count() < self.config.min_text_length {
                removed_indices.push(idx);
                continue;
            }

            // Exact-duplicate short circuit
            let sig = signature(text);
            if seen_signatures.contains(&sig) {
                removed_indices.push(idx);
                continue;
            }

            // Fuzzy comparison against every kept text; first
            // match at or above the threshold wins
            let mut is_duplicate = false;
            for existing in &kept {
                let score = similarity(text, existing);
                if score >= self.config.similarity_threshold {
                    is_duplicate = true;
                    removed_indices.push(idx);
                    tracing::debug!(
                        "Removing duplicate (similarity: {:.2}): {}...",
                        score,
                        prefix(text, 50)
                    );
                    break;
                }
            }

            if !is_duplicate {
                kept.push(text.clone());
                seen_signatures.insert(sig);
            }
        }

        tracing::info!(
            "Deduplicated {} texts to {} (removed {})",
            texts.len(),
            kept.len(),
            removed_indices.len()
        );

        DedupOutcome {
            original_count: texts.len(),
            deduplicated_count: kept.len(),
            texts: kept,
            removed_indices,
        }
    }
}

/// Signature for exact-duplicate detection: lowercased, trimmed,
/// first 200 characters.
fn signature(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .chars()
        .take(SIGNATURE_PREFIX_CHARS)
        .collect()
}

/// First `n` characters of `text`, for log lines.
fn prefix(text: &str, n: usize) -> String {
    text.chars().take(n).collect()
}
