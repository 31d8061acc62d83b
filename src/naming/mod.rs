//! Human-readable names for .NET identifiers.
//!
//! .NET identifiers can't contain spaces, so test, class and namespace names
//! are written in "CamelCase". This module turns them back into sentences:
//!
//! ```text
//! WhenTheDbSynchronizerRuns ──► split ──► [When, The, DbSynchronizer, Runs]
//!                                                   │
//!                                                   ▼
//!                              to_sentence ──► "When the DbSynchronizer runs"
//! ```
//!
//! Both steps take their exceptions from [`NamingConfig`]: literals that must
//! not be split, and words that must keep their casing.

pub mod camelcase;
pub mod sentence;

use crate::config::NamingConfig;

/// Converts a single "CamelCase" identifier into a readable sentence.
pub fn humanize(identifier: &str, config: &NamingConfig) -> String {
    let words = camelcase::split(identifier, &config.no_split);

    sentence::to_sentence(&words, &config.no_transform)
}
