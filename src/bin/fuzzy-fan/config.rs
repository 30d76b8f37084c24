//! Configuration file handling.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fuzzy_fan::UNIT_STEP;
use serde::{Deserialize, Serialize};

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "fuzzy-fan.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sampling: SamplingConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Distance between curve samples
    #[serde(default = "default_step")]
    pub step: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Decimals printed for membership degrees
    #[serde(default = "default_precision")]
    pub precision: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Json,
}

fn default_step() -> f64 {
    UNIT_STEP
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_precision() -> usize {
    2
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self { step: default_step() }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            precision: default_precision(),
        }
    }
}

impl Config {
    /// Loads `path` when given, failing if it cannot be read. Without a path
    /// the default file is used if present, otherwise the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);

                if !default.exists() {
                    tracing::debug!("no configuration file, using defaults");
                    return Ok(Self::default());
                }

                default
            },
        };

        let contents =
            fs::read_to_string(&path).with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::parse(&contents).with_context(|| format!("invalid config file {}", path.display()))?;

        tracing::info!(path = %path.display(), "loaded configuration");

        Ok(config)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.sampling.step, 1.);
        assert_eq!(config.output.format, OutputFormat::Table);
        assert_eq!(config.output.precision, 2);
        assert_eq!(Config::parse("").unwrap(), config);
    }

    #[test]
    fn test_partial_file() {
        let config = Config::parse("[output]\nformat = \"json\"\n").unwrap();

        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.precision, 2);
        assert_eq!(config.sampling.step, 1.);
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[sampling]\nstep = 0.5\n\n[output]\nprecision = 4").unwrap();

        let config = Config::load(Some(file.path())).unwrap();

        assert_eq!(config.sampling.step, 0.5);
        assert_eq!(config.output.precision, 4);
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("missing.toml"))).unwrap_err();

        assert!(err.to_string().contains("failed to read config file"));
    }

    #[test]
    fn test_invalid_file() {
        assert!(Config::parse("[output]\nformat = \"xml\"\n").is_err());
    }
}
