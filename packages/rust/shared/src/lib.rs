//! Shared types, error model, and configuration for ctigroup.
//!
//! This crate is the foundation depended on by the other ctigroup crates.
//! It provides:
//! - [`CtiGroupError`] — the unified error type
//! - Domain types ([`ClassificationKey`], [`OutputRecord`])
//! - Configuration ([`AppConfig`], [`ConvertOptions`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, ConvertOptions, MAX_INDENT, OutputConfig, RecordConfig, config_dir,
    config_file_path, load_config, load_config_from,
};
pub use error::{CtiGroupError, Result};
pub use types::{
    ClassificationKey, DEFAULT_CATEGORY, DEFAULT_ITEM, DEFAULT_JUSTIFICATION, OutputRecord,
};
