//! Textprep - Text preparation core for embedding pipelines
//!
//! Cleans noisy document text, removes duplicate or near-duplicate
//! passages, and splits long text into bounded, overlapping
//! segments suitable for embedding-model input limits.
//!
//! # Architecture
//!
//! All logic lives in the **core** module, organized the same way
//! a hosting service would consume it:
//!
//! - config, error, types
//! - normalize (HTML/markdown/special-char/whitespace cleaning)
//! - dedup (signature + Ratcliff–Obershelp similarity)
//! - chunker (recursive separator hierarchy)
//! - services (unified service container)
//!
//! The HTTP layer, embedding-model invocation, and document
//! conversion are external collaborators: they produce or consume
//! the plain strings that flow through this crate.
//!
//! # Key Features
//!
//! - UTF-8 safe chunking (character-based, never panics)
//! - Idempotent, deterministic normalization passes
//! - Order-preserving batch deduplication
//! - Pure synchronous operations, safe to share across threads
//!
//! # Example
//!
//! ```
//! use textprep::{Config, Services};
//!
//! let services = Services::new(Config::default());
//!
//! let result = services.normalize_text("<p>Hello <b>world</b></p>", true);
//! assert_eq!(result.text, "Hello world");
//! assert_eq!(result.metadata.word_count, 2);
//!
//! let chunks = services.chunk_text_with("AAAA\n\nBBBB\n\nCCCC", 10, 4).unwrap();
//! assert_eq!(chunks.len(), 2);
//! ```

// Core domain logic (transport-agnostic)
pub mod core;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{Result, TextPrepError};
pub use core::services::Services;
pub use core::types::{DedupOutcome, NormalizedText, TextMetadata};
