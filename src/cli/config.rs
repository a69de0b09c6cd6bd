//! TOML configuration file support.
//!
//! Defaults for the line-producing commands can be kept in a config file
//! instead of being repeated on every invocation:
//!
//! ```toml
//! # diffusivity.toml
//! [fit]
//! domain_low = 6.0
//! domain_high = 10.0
//!
//! [output]
//! format = "csv"
//! ```
//!
//! Command-line flags override file values, which override built-in defaults.

use anyhow::{Context, Result};
use log::info;
use serde::Deserialize;
use std::path::Path;

use mantle_diffusivity::arrhenius::LineDomain;

use super::OutputFormat;

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "diffusivity.toml";

/// Root configuration structure for diffusivity.toml files.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Line fitting settings.
    #[serde(default)]
    pub fit: FitConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Configuration for the fit, mechanism and law commands.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FitConfig {
    /// Lower bound of the sampled domain, in 10⁴/T(K).
    pub domain_low: Option<f64>,

    /// Upper bound of the sampled domain, in 10⁴/T(K).
    pub domain_high: Option<f64>,
}

/// Configuration for how results are written.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Output format (table, csv, json).
    pub format: Option<OutputFormat>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Load the given file, or `diffusivity.toml` from the working directory if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                info!("Using config file: {}", path.display());
                Self::from_file(path)
            }
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    info!("Using config file: {}", default.display());
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Sampling domain after applying command-line overrides
    pub fn domain(&self, low: Option<f64>, high: Option<f64>) -> Result<LineDomain> {
        let defaults = LineDomain::default();
        let low = low.or(self.fit.domain_low).unwrap_or(defaults.low);
        let high = high.or(self.fit.domain_high).unwrap_or(defaults.high);
        LineDomain::new(low, high).context("Invalid sampling domain")
    }

    /// Output format after applying the command-line override
    pub fn format(&self, format: Option<OutputFormat>) -> OutputFormat {
        format.or(self.output.format).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [fit]
            domain_low = 7.0
            domain_high = 9.5

            [output]
            format = "json"
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.fit.domain_low, Some(7.0));
        assert_eq!(config.fit.domain_high, Some(9.5));
        assert_eq!(config.output.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [fit]
            domain_high = 8.0
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.fit.domain_low, None);
        let domain = config.domain(None, None).unwrap();
        assert_eq!(domain.low, 6.0);
        assert_eq!(domain.high, 8.0);
        assert_eq!(config.format(None), OutputFormat::Table);
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.fit.domain_low, None);
        assert_eq!(config.domain(None, None).unwrap(), LineDomain::default());
    }

    #[test]
    fn test_cli_overrides_file() {
        let config = Config::from_str("[fit]\ndomain_low = 7.0\n[output]\nformat = \"csv\"").unwrap();
        let domain = config.domain(Some(8.0), None).unwrap();
        assert_eq!(domain.low, 8.0);
        assert_eq!(domain.high, 10.0);
        assert_eq!(config.format(Some(OutputFormat::Json)), OutputFormat::Json);
        assert_eq!(config.format(None), OutputFormat::Csv);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Config::from_str("[output]\nformat = \"xml\"").is_err());
        assert!(Config::from_str("[fit]\ndomain = 6.0").is_err());

        let config = Config::from_str("[fit]\ndomain_low = 9.0\ndomain_high = 8.0").unwrap();
        assert!(config.domain(None, None).is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&path, "[fit]\ndomain_low = 6.5\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.fit.domain_low, Some(6.5));
        assert!(Config::from_file(&dir.path().join("missing.toml")).is_err());
    }
}
