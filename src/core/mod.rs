//! Core text preparation logic (transport-agnostic)
//!
//! This module contains all business logic, independent of any
//! service layer that may host it.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **normalize**: HTML/markdown/whitespace cleaning + metadata
//! - **dedup**: Exact and fuzzy duplicate removal
//! - **chunker**: Recursive separator-hierarchy splitting
//! - **services**: Unified service container

pub mod chunker;
pub mod config;
pub mod dedup;
pub mod error;
pub mod normalize;
pub mod services;
pub mod types;

// Re-export key types for convenience
pub use config::Config;
pub use error::{Result, TextPrepError};
pub use services::Services;
