//! Application configuration for ctigroup.
//!
//! User config lives at `~/.ctigroup/ctigroup.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CtiGroupError, Result};
use crate::types::{DEFAULT_CATEGORY, DEFAULT_ITEM, DEFAULT_JUSTIFICATION};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "ctigroup.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".ctigroup";

/// Largest accepted JSON indentation width.
pub const MAX_INDENT: usize = 16;

// ---------------------------------------------------------------------------
// Config structs (matching ctigroup.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Metadata stamped on output records.
    #[serde(default)]
    pub record: RecordConfig,

    /// JSON output formatting.
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[record]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordConfig {
    /// Category written on every record.
    #[serde(default = "default_category")]
    pub category: String,

    /// Justification written on every record.
    #[serde(default = "default_justification")]
    pub justification: String,

    /// Item used when a path has only category and type.
    #[serde(default = "default_item")]
    pub default_item: String,
}

impl Default for RecordConfig {
    fn default() -> Self {
        Self {
            category: default_category(),
            justification: default_justification(),
            default_item: default_item(),
        }
    }
}

fn default_category() -> String {
    DEFAULT_CATEGORY.into()
}
fn default_justification() -> String {
    DEFAULT_JUSTIFICATION.into()
}
fn default_item() -> String {
    DEFAULT_ITEM.into()
}

/// `[output]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Spaces per JSON indentation level.
    #[serde(default = "default_indent")]
    pub indent: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
        }
    }
}

fn default_indent() -> usize {
    4
}

// ---------------------------------------------------------------------------
// Convert options (runtime, merged from config + CLI flags)
// ---------------------------------------------------------------------------

/// Runtime conversion options — merged from config file + CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Category written on every record.
    pub category: String,
    /// Justification written on every record.
    pub justification: String,
    /// Item used for two-segment paths.
    pub default_item: String,
    /// Spaces per JSON indentation level.
    pub indent: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

impl From<&AppConfig> for ConvertOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            category: config.record.category.clone(),
            justification: config.record.justification.clone(),
            default_item: config.record.default_item.clone(),
            indent: config.output.indent,
        }
    }
}

impl ConvertOptions {
    /// Reject values the JSON writer cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.indent > MAX_INDENT {
            return Err(CtiGroupError::config(format!(
                "indent must be at most {MAX_INDENT}, got {}",
                self.indent
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.ctigroup/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| CtiGroupError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.ctigroup/ctigroup.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = match config_file_path() {
        Ok(path) => path,
        Err(e) => {
            tracing::debug!(error = %e, "no home directory, using default config");
            return Ok(AppConfig::default());
        }
    };

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| CtiGroupError::read(path, e))?;

    let config: AppConfig = toml::from_str(&content).map_err(|e| {
        CtiGroupError::config(format!("failed to parse {}: {e}", path.display()))
    })?;
    tracing::debug!(?path, "loaded config file");

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("Network Reliability Engineering (NRE)"));
        assert!(toml_str.contains("indent = 4"));
    }

    #[test]
    fn partial_config_fills_defaults() {
        let toml_str = r#"
[record]
category = "Site Reliability"
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(config.record.category, "Site Reliability");
        assert_eq!(config.record.justification, "Initial title additions");
        assert_eq!(config.record.default_item, "Other");
        assert_eq!(config.output.indent, 4);
    }

    #[test]
    fn convert_options_from_app_config() {
        let mut app = AppConfig::default();
        app.output.indent = 2;
        app.record.default_item = "Misc".into();
        let opts = ConvertOptions::from(&app);
        assert_eq!(opts.indent, 2);
        assert_eq!(opts.default_item, "Misc");
        assert_eq!(opts.category, DEFAULT_CATEGORY);
    }

    #[test]
    fn indent_validation() {
        let mut opts = ConvertOptions::default();
        assert!(opts.validate().is_ok());
        opts.indent = MAX_INDENT + 1;
        let err = opts.validate().unwrap_err();
        assert!(err.to_string().contains("indent must be at most"));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("ctigroup.toml");
        std::fs::write(&path, "[output]\nindent = 2\n").expect("write config");

        let config = load_config_from(&path).expect("load");
        assert_eq!(config.output.indent, 2);
        assert_eq!(config.record.category, DEFAULT_CATEGORY);
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = load_config_from(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(CtiGroupError::Read { .. })));
    }

    #[test]
    fn load_invalid_toml_is_config_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[output\nindent = ").expect("write config");
        let result = load_config_from(&path);
        assert!(matches!(result, Err(CtiGroupError::Config { .. })));
    }
}
