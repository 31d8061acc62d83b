//! JSON output of test results.
//!
//! All files are collected and written as a single array once the run
//! finishes, so the output is always one valid JSON document:
//!
//! ```json
//! [
//!   { "source": "results.xml", "run": { "computer": "WIN11", "assemblies": [] } },
//!   { "source": "broken.xml", "error": "Malformed document: no root element" }
//! ]
//! ```

use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::Reporter;
use crate::xunit::TestRun;

#[derive(Debug, Serialize)]
struct Entry {
    source: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    run: Option<TestRun>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Reporter that writes every test run as JSON.
pub struct JsonReporter<W: Write> {
    target: W,
    entries: Vec<Entry>,
}

impl JsonReporter<io::Stdout> {
    /// Create a JSON reporter that prints to stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonReporter<W> {
    pub fn new(target: W) -> Self {
        Self {
            target,
            entries: Vec::new(),
        }
    }

    /// Consume the reporter, returning its target.
    pub fn into_inner(self) -> W {
        self.target
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn report(&mut self, source: &Path, run: &TestRun) -> io::Result<()> {
        self.entries.push(Entry {
            source: source.to_path_buf(),
            run: Some(run.clone()),
            error: None,
        });
        Ok(())
    }

    fn report_error(&mut self, source: &Path, error: &dyn fmt::Display) -> io::Result<()> {
        self.entries.push(Entry {
            source: source.to_path_buf(),
            run: None,
            error: Some(error.to_string()),
        });
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.target, &self.entries)?;
        writeln!(self.target)?;
        self.target.flush()
    }
}
