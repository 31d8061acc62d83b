//! xunit-viz: readable summaries of .NET test results.
//!
//! This crate parses test results in xUnit's v2+ XML format and turns the
//! flat list of tests into a tree that mirrors how the tests are written.
//!
//! # Architecture
//!
//! The main components are:
//!
//! - **Naming**: Turn "CamelCase" identifiers into sentences
//! - **Xunit**: Decode the XML, rename every test and group the tests per
//!   trait and nested class
//! - **Report**: Print the grouped tests (console, JSON)
//! - **Config**: Naming exceptions and timing thresholds (TOML)
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use xunit_viz::config::load_config_or_default;
//! use xunit_viz::report::{ConsoleReporter, Reporter};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = load_config_or_default(Path::new("xunit-viz.toml"))?;
//!     let path = Path::new("TestResults/results.xml");
//!     let run = xunit_viz::xunit::load_file(path, &config.naming)?;
//!
//!     let mut reporter = ConsoleReporter::stdout(config.report, false);
//!     reporter.report(path, &run)?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod naming;
pub mod report;
pub mod xunit;

// Re-export commonly used types
pub use config::{Config, load_config};
pub use report::Reporter;
pub use xunit::{Assembly, TestGroup, TestOutcome, TestRecord, TestRun, XunitError};
