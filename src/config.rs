//! Configuration for linediff
//!
//! Supports loading from `.linediff.toml` (working directory) or
//! `~/.config/linediff/config.toml` (global).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{DiffAlgorithm, DiffOptions};
use crate::present::HighlightStyles;

/// File name of the per-directory config
pub const LOCAL_CONFIG_FILE: &str = ".linediff.toml";

/// Full linediff configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinediffConfig {
    /// Diff computation settings
    pub diff: DiffSettings,

    /// Class names used by the paired highlight maps
    pub highlight: HighlightStyles,

    /// Terminal output settings
    pub output: OutputSettings,
}

/// Diff computation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffSettings {
    /// Line matching algorithm
    pub algorithm: DiffAlgorithm,

    /// Unchanged lines shown around each change in unified output
    /// Default: 3
    pub context_lines: usize,
}

impl Default for DiffSettings {
    fn default() -> Self {
        Self {
            algorithm: DiffAlgorithm::Myers,
            context_lines: 3,
        }
    }
}

impl DiffSettings {
    pub fn options(&self) -> DiffOptions {
        DiffOptions {
            algorithm: self.algorithm,
        }
    }
}

/// Terminal output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Colorize pretty output
    pub color: bool,

    /// Send long pretty output through `$PAGER` when stdout is a terminal
    pub pager: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            color: true,
            pager: true,
        }
    }
}

impl LinediffConfig {
    /// Load configuration from a directory, falling back to global config
    pub fn load(dir: &Path) -> Result<Self> {
        let local_config = Self::local_config_path(dir);
        if local_config.exists() {
            return Self::load_from_file(&local_config);
        }

        if let Some(global_config) = Self::global_config_path() {
            if global_config.exists() {
                return Self::load_from_file(&global_config);
            }
        }

        debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Get global config path (~/.config/linediff/config.toml)
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("linediff").join("config.toml"))
    }

    /// Get the per-directory config path
    pub fn local_config_path(dir: &Path) -> PathBuf {
        dir.join(LOCAL_CONFIG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = LinediffConfig::default();
        assert_eq!(config.diff.algorithm, DiffAlgorithm::Myers);
        assert_eq!(config.diff.context_lines, 3);
        assert_eq!(config.highlight.added, "added-style");
        assert_eq!(config.highlight.removed, "removed-style");
        assert!(config.output.color);
        assert!(config.output.pager);
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(LOCAL_CONFIG_FILE);

        std::fs::write(
            &config_path,
            r#"
[diff]
algorithm = "patience"
context_lines = 5

[highlight]
added = "line-added"
"#,
        )
        .unwrap();

        let config = LinediffConfig::load_from_file(&config_path).unwrap();
        assert_eq!(config.diff.algorithm, DiffAlgorithm::Patience);
        assert_eq!(config.diff.context_lines, 5);
        assert_eq!(config.highlight.added, "line-added");
        // Unset keys keep their defaults
        assert_eq!(config.highlight.removed, "removed-style");
        assert!(config.output.pager);
    }

    #[test]
    fn test_load_prefers_local_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(LOCAL_CONFIG_FILE),
            "[output]\ncolor = false\n",
        )
        .unwrap();

        let config = LinediffConfig::load(dir.path()).unwrap();
        assert!(!config.output.color);
    }

    #[test]
    fn test_parse_error_names_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(LOCAL_CONFIG_FILE);
        std::fs::write(&config_path, "[diff]\nalgorithm = \"bogus\"\n").unwrap();

        let err = LinediffConfig::load_from_file(&config_path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse config file"));
    }

    #[test]
    fn test_missing_file_error() {
        let dir = TempDir::new().unwrap();
        let err = LinediffConfig::load_from_file(&dir.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_options_from_settings() {
        let settings = DiffSettings {
            algorithm: DiffAlgorithm::Patience,
            context_lines: 1,
        };
        assert_eq!(settings.options().algorithm, DiffAlgorithm::Patience);
    }
}
