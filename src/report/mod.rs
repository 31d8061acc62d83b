//! Test result reporting and output generation.
//!
//! This module provides the [`Reporter`] trait and its implementations:
//! a colored console summary and a JSON document for further processing.

pub mod console;
pub mod json;

use std::fmt;
use std::io;
use std::path::Path;

use crate::xunit::TestRun;

pub use console::ConsoleReporter;
pub use json::JsonReporter;

/// A reporter receives every loaded test result file.
pub trait Reporter {
    /// Called when a file has been loaded.
    fn report(&mut self, source: &Path, run: &TestRun) -> io::Result<()>;

    /// Called when a file couldn't be loaded.
    fn report_error(&mut self, source: &Path, error: &dyn fmt::Display) -> io::Result<()>;

    /// Called once all files have been processed.
    fn finish(&mut self) -> io::Result<()>;
}
