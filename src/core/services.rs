//! Unified service container for textprep.
//!
//! Provides shared access to the normalization and deduplication
//! components, constructed once from configuration by the host.
//! This replaces lazily-initialized global singletons: there is
//! no module-level mutable state anywhere in the core.

use crate::core::chunker;
use crate::core::config::Config;
use crate::core::dedup::Deduplicator;
use crate::core::error::Result;
use crate::core::normalize::Normalizer;
use crate::core::types::NormalizedText;
use std::sync::Arc;

/// Unified services container
///
/// Cheap to clone; all clones share the same component instances.
/// Every operation is a pure function of its inputs plus the
/// immutable configuration, so a single container is safe to use
/// from concurrent callers without locking.
#[derive(Clone)]
pub struct Services {
    /// Text normalization component
    pub normalizer: Arc<Normalizer>,

    /// Batch deduplication component
    pub deduplicator: Arc<Deduplicator>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    pub fn new(config: Config) -> Self {
        let normalizer = Arc::new(Normalizer::new(config.normalize.clone()));
        let deduplicator = Arc::new(Deduplicator::new(config.normalize.clone()));

        Self {
            normalizer,
            deduplicator,
            config: Arc::new(config),
        }
    }

    /// Normalize a single text and describe the result.
    pub fn normalize_text(&self, text: &str, clean_html_tags: bool) -> NormalizedText {
        self.normalizer.normalize_with_metadata(text, clean_html_tags)
    }

    /// Normalize a batch of texts.
    ///
    /// Every item is normalized, results shorter than the
    /// configured minimum length are dropped, and duplicates are
    /// optionally removed. Survivors keep their original relative
    /// order.
    pub fn normalize_batch(
        &self,
        texts: &[String],
        deduplicate: bool,
        clean_html_tags: bool,
    ) -> Vec<String> {
        let min_len = self.normalizer.min_text_length();

        let normalized: Vec<String> = texts
            .iter()
            .map(|text| self.normalizer.normalize(text, clean_html_tags))
            .filter(|text| !text.is_empty() && text.chars().count() >= min_len)
            .collect();

        if deduplicate {
            self.deduplicator.deduplicate(&normalized).texts
        } else {
            normalized
        }
    }

    /// Chunk a text using the configured size and overlap.
    pub fn chunk_text(&self, text: &str) -> Result<Vec<String>> {
        chunker::chunk_text(
            text,
            self.config.chunking.chunk_size,
            self.config.chunking.chunk_overlap,
        )
    }

    /// Chunk a text with per-call size and overlap.
    pub fn chunk_text_with(
        &self,
        text: &str,
        chunk_size: usize,
        chunk_overlap: usize,
    ) -> Result<Vec<String>> {
        chunker::chunk_text(text, chunk_size, chunk_overlap)
    }
}
