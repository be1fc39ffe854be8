use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use pcalc_parser::{ParseOptions, DEFAULT_MAX_NESTING};
use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

/// Diagnostic verbosity. Diagnostics go to stderr next to the `ERROR`
/// reports, so the default is `off`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[default]
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalcConfig {
    pub log_level: LogLevel,
    /// Deepest parenthesis nesting accepted in a literal.
    pub max_nesting: usize,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Off,
            max_nesting: DEFAULT_MAX_NESTING,
        }
    }
}

impl CalcConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            max_nesting: self.max_nesting,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = CalcConfig::from_toml_str("").unwrap();
        assert_eq!(config, CalcConfig::default());
        assert_eq!(config.parse_options(), ParseOptions::default());
    }

    #[test]
    fn test_partial_file() {
        let config = CalcConfig::from_toml_str("log_level = \"debug\"\n").unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.max_nesting, DEFAULT_MAX_NESTING);

        let config = CalcConfig::from_toml_str("max_nesting = 8").unwrap();
        assert_eq!(config.log_level, LogLevel::Off);
        assert_eq!(config.parse_options().max_nesting, 8);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(CalcConfig::from_toml_str("verbose = true").is_err());
    }

    #[test]
    fn test_bad_level_rejected() {
        assert!(CalcConfig::from_toml_str("log_level = \"loud\"").is_err());
        assert!(CalcConfig::from_toml_str("log_level = \"DEBUG\"").is_err());
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = CalcConfig {
            log_level: LogLevel::Trace,
            max_nesting: 64,
        };
        let text = toml::to_string(&config).unwrap();
        assert_eq!(CalcConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_missing_file() {
        let err = CalcConfig::load(Path::new("/nonexistent/pcalc.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }

    #[test]
    fn test_level_filter() {
        assert_eq!(LogLevel::Off.to_level_filter(), LevelFilter::OFF);
        assert_eq!(LogLevel::Warn.to_level_filter(), LevelFilter::WARN);
    }
}
