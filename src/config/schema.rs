//! Configuration schema definitions for xunit-viz.
//!
//! This module defines all configuration types that can be deserialized from
//! TOML configuration files. Every section is optional; an empty file yields
//! the same settings as [`Config::default`].
//!
//! # Schema Overview
//!
//! ```text
//! Config (root)
//! ├── NamingConfig   - Exceptions for turning identifiers into sentences
//! └── ReportConfig   - Timing thresholds for the console badges
//! ```

use serde::{Deserialize, Serialize};

/// Root configuration structure for xunit-viz.
///
/// # TOML Structure
///
/// ```toml
/// [naming]
/// no_split = ["HostBuilder", "DBSyncer", "DbSynchronizer"]
/// no_transform = ["DbSynchronizer", "DBSyncer"]
///
/// [report]
/// threshold_fast = 0.05
/// threshold_normal = 0.1
/// ```
///
/// # Example
///
/// ```
/// use xunit_viz::config::Config;
///
/// let config: Config = toml::from_str(r#"
///     [report]
///     threshold_fast = 0.2
/// "#).unwrap();
///
/// assert_eq!(config.report.threshold_fast, 0.2);
/// assert_eq!(config.report.threshold_normal, 0.1);
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Settings for turning .NET identifiers into readable names.
    #[serde(default)]
    pub naming: NamingConfig,

    /// Settings for the console report.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Exceptions applied when identifiers are converted to sentences.
///
/// # Defaults
///
/// | Field | Default |
/// |-------|---------|
/// | `no_split` | `["HostBuilder", "DBSyncer", "DbSynchronizer"]` |
/// | `no_transform` | `["DbSynchronizer", "DBSyncer"]` |
///
/// Both lists are read-only once loaded; the naming functions borrow them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NamingConfig {
    /// Literals that are never split into separate words.
    ///
    /// A word keeps growing for as long as the text read so far is the start
    /// of one of these literals, so `HostBuilder` stays one word in
    /// `CreateHostBuilder`.
    #[serde(default = "default_no_split")]
    pub no_split: Vec<String>,

    /// Words that keep their casing in a sentence.
    ///
    /// Every word but the first is lowercased unless it matches one of these
    /// exactly.
    #[serde(default = "default_no_transform")]
    pub no_transform: Vec<String>,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            no_split: default_no_split(),
            no_transform: default_no_transform(),
        }
    }
}

fn default_no_split() -> Vec<String> {
    vec![
        "HostBuilder".to_string(),
        "DBSyncer".to_string(),
        "DbSynchronizer".to_string(),
    ]
}

fn default_no_transform() -> Vec<String> {
    vec!["DbSynchronizer".to_string(), "DBSyncer".to_string()]
}

/// Console report settings.
///
/// Each test is decorated with a badge that reflects its duration:
///
/// | Duration | Badge |
/// |----------|-------|
/// | `<= threshold_fast` | 🚀 |
/// | `<= threshold_normal` | 🕐 |
/// | otherwise | 🐌 |
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Upper bound (in seconds) for a test to count as fast.
    ///
    /// Default: 0.05
    #[serde(default = "default_threshold_fast")]
    pub threshold_fast: f64,

    /// Upper bound (in seconds) for a test to count as normal.
    ///
    /// Default: 0.1
    #[serde(default = "default_threshold_normal")]
    pub threshold_normal: f64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            threshold_fast: default_threshold_fast(),
            threshold_normal: default_threshold_normal(),
        }
    }
}

impl ReportConfig {
    /// Classifies a test duration (in seconds).
    pub fn badge(&self, time: f64) -> TimingBadge {
        if time <= self.threshold_fast {
            TimingBadge::Fast
        } else if time <= self.threshold_normal {
            TimingBadge::Normal
        } else {
            TimingBadge::Slow
        }
    }
}

fn default_threshold_fast() -> f64 {
    0.05
}

fn default_threshold_normal() -> f64 {
    0.1
}

/// Duration class of a single test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimingBadge {
    Fast,
    Normal,
    Slow,
}

impl TimingBadge {
    /// The emoji shown in front of a test.
    pub fn symbol(self) -> &'static str {
        match self {
            TimingBadge::Fast => "🚀",
            TimingBadge::Normal => "🕐",
            TimingBadge::Slow => "🐌",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config.naming, NamingConfig::default());
        assert_eq!(config.report, ReportConfig::default());
        assert_eq!(config.naming.no_split.len(), 3);
    }

    #[test]
    fn test_partial_naming_section() {
        let config: Config = toml::from_str(
            r#"
            [naming]
            no_split = ["IOStream"]
            "#,
        )
        .unwrap();

        assert_eq!(config.naming.no_split, vec!["IOStream".to_string()]);
        assert_eq!(config.naming.no_transform, default_no_transform());
    }

    #[test]
    fn test_badge_thresholds() {
        let report = ReportConfig::default();

        assert_eq!(report.badge(0.0), TimingBadge::Fast);
        assert_eq!(report.badge(0.05), TimingBadge::Fast);
        assert_eq!(report.badge(0.07), TimingBadge::Normal);
        assert_eq!(report.badge(0.1), TimingBadge::Normal);
        assert_eq!(report.badge(1.5), TimingBadge::Slow);
    }

    #[test]
    fn test_badge_symbols() {
        assert_eq!(TimingBadge::Fast.symbol(), "🚀");
        assert_eq!(TimingBadge::Normal.symbol(), "🕐");
        assert_eq!(TimingBadge::Slow.symbol(), "🐌");
    }
}
