//! Configuration management for the textprep core.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.
//! The host constructs a [`Config`] once and passes it to
//! [`Services`](crate::core::services::Services); nothing in the
//! core reads the environment after startup.

use crate::core::error::{Result, TextPrepError};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub normalize: NormalizeConfig,
    #[serde(default)]
    pub chunking: ChunkingConfig,
}

/// Normalization and deduplication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NormalizeConfig {
    /// Similarity ratio at or above which two texts count as duplicates (0-1)
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,

    /// Minimum text length to keep, in characters (not bytes!)
    #[serde(default = "default_min_text_length")]
    pub min_text_length: usize,
}

/// Chunking configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChunkingConfig {
    /// Characters per chunk (not bytes!)
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Character overlap between consecutive chunks
    #[serde(default = "default_chunk_overlap")]
    pub chunk_overlap: usize,
}

// Default value functions
fn default_similarity_threshold() -> f64 {
    0.85
}

fn default_min_text_length() -> usize {
    50
}

fn default_chunk_size() -> usize {
    500
}

fn default_chunk_overlap() -> usize {
    50
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: default_similarity_threshold(),
            min_text_length: default_min_text_length(),
        }
    }
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            chunk_overlap: default_chunk_overlap(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| TextPrepError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Create default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// Priority order:
    /// 1. TEXTPREP_CONFIG env var pointing at a TOML file
    /// 2. ./textprep.toml
    /// 3. Defaults
    pub fn load() -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("TEXTPREP_CONFIG") {
            Self::from_file(config_path)?
        } else if Path::new("textprep.toml").exists() {
            Self::from_file("textprep.toml")?
        } else {
            Self::default()
        };

        // Override with environment variables
        config.merge_env();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        // Normalization configuration
        if let Ok(threshold) = env::var("TEXTPREP_SIMILARITY_THRESHOLD") {
            if let Ok(t) = threshold.parse() {
                self.normalize.similarity_threshold = t;
            }
        }
        if let Ok(min_len) = env::var("TEXTPREP_MIN_TEXT_LENGTH") {
            if let Ok(len) = min_len.parse() {
                self.normalize.min_text_length = len;
            }
        }

        // Chunking configuration
        if let Ok(chunk_size) = env::var("TEXTPREP_CHUNK_SIZE") {
            if let Ok(size) = chunk_size.parse() {
                self.chunking.chunk_size = size;
            }
        }
        if let Ok(overlap) = env::var("TEXTPREP_CHUNK_OVERLAP") {
            if let Ok(o) = overlap.parse() {
                self.chunking.chunk_overlap = o;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate normalization config
        if !(0.0..=1.0).contains(&self.normalize.similarity_threshold) {
            return Err(TextPrepError::ConfigError(
                "Similarity threshold must be between 0 and 1".to_string(),
            ));
        }

        // Validate chunking config
        if self.chunking.chunk_size == 0 {
            return Err(TextPrepError::ConfigError(
                "Chunk size must be non-zero".to_string(),
            ));
        }

        if self.chunking.chunk_overlap >= self.chunking.chunk_size {
            return Err(TextPrepError::ConfigError(
                "Chunk overlap must be less than chunk size".to_string(),
            ));
        }

        Ok(())
    }
}
