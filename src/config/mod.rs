//! Configuration loading and schema definitions.

pub mod schema;

pub use schema::*;

use std::path::Path;

use anyhow::{Context, Result};

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    Ok(config)
}

/// Load configuration from a string.
pub fn load_config_str(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).context("Failed to parse config")?;

    Ok(config)
}

/// Load configuration from `path`, falling back to the defaults when the file
/// doesn't exist.
///
/// Only meant for the implicit default location; a path the user asked for
/// explicitly should go through [`load_config`] so a typo is reported.
pub fn load_config_or_default(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::debug!(
            "No config file at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    load_config(path)
}

/// Renders `config` as the contents of a configuration file.
pub fn to_toml(config: &Config) -> Result<String> {
    toml::to_string_pretty(config).context("Failed to serialize config")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_str_invalid() {
        let err = load_config_str("[report]\nthreshold_fast = \"fast\"").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        assert!(load_config(&path).is_err());
        assert_eq!(
            load_config_or_default(&path).unwrap().report,
            ReportConfig::default()
        );
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("xunit-viz.toml");
        std::fs::write(&path, "[report]\nthreshold_normal = 0.5\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.report.threshold_normal, 0.5);
        assert_eq!(config.naming, NamingConfig::default());
    }

    #[test]
    fn test_to_toml_round_trips_defaults() {
        let rendered = to_toml(&Config::default()).unwrap();
        let config = load_config_str(&rendered).unwrap();

        assert_eq!(config.naming, NamingConfig::default());
        assert_eq!(config.report, ReportConfig::default());
    }
}
