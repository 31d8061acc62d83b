//! Loading of .NET test results in xUnit's v2+ XML format.
//!
//! The document is decoded in two steps:
//!
//! 1. **Deserialize**: the XML is mapped onto the raw [`schema`] types.
//! 2. **Read**: the raw types are turned into a [`TestRun`], where the tests
//!    of every assembly are renamed ([`name`]) and grouped ([`tree`]).
//!
//! A document that can't be decoded yields an [`XunitError`] and no partial
//! result.
//!
//! # Example
//!
//! ```
//! use xunit_viz::config::NamingConfig;
//! use xunit_viz::xunit;
//!
//! let run = xunit::load_str(
//!     r#"<assemblies computer="WIN11">
//!          <assembly name="C:\Tests\App.Tests.dll" total="1" passed="1">
//!            <collection>
//!              <test name="App.Tests.CalculatorTests.AddsTwoNumbers" result="Pass" time="0.01" />
//!            </collection>
//!          </assembly>
//!        </assemblies>"#,
//!     &NamingConfig::default(),
//! )?;
//!
//! assert_eq!(run.assemblies[0].name, "App.Tests.dll");
//! assert_eq!(run.assemblies[0].test_groups[0].tests[0].name, "Adds two numbers");
//! # Ok::<(), xunit_viz::xunit::XunitError>(())
//! ```

pub mod name;
pub(crate) mod schema;
pub mod tree;

use std::fmt;
use std::io::Read;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::config::NamingConfig;

pub use tree::{DecodedTest, TestGroup, group_tests};

/// Result type for loading test results.
pub type XunitResult<T> = Result<T, XunitError>;

/// Errors that can occur while loading a test result document.
#[derive(Debug, thiserror::Error)]
pub enum XunitError {
    /// The document couldn't be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The document isn't well-formed XML.
    #[error("Invalid XML: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The XML doesn't match xUnit's v2+ format.
    #[error("Failed to decode test results: {0}")]
    Decode(#[from] quick_xml::DeError),

    /// The document has a root element other than `<assemblies>`.
    #[error("Expected root element <assemblies>, found <{0}>")]
    UnexpectedRoot(String),

    /// The document has no root element.
    #[error("Malformed document: {0}")]
    Malformed(String),
}

/// The result of a `dotnet test` run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TestRun {
    /// The name of the computer that ran the tests.
    pub computer: String,

    /// The name of the user that ran the tests.
    pub user: String,

    /// The time the first assembly started running.
    pub start_time_rtf: String,

    /// The time the last assembly finished running.
    pub end_time_rtf: String,

    /// The time the first assembly started running (older runners).
    pub timestamp: String,

    /// The assemblies that are part of this run.
    pub assemblies: Vec<Assembly>,
}

impl TestRun {
    /// The end time to show: `finish-rtf` when present, the timestamp otherwise.
    pub fn end_time(&self) -> Option<&str> {
        [&self.end_time_rtf, &self.timestamp]
            .into_iter()
            .find(|t| !t.is_empty())
            .map(String::as_str)
    }

    /// Returns true if any assembly reports failed tests or errors.
    pub fn has_failures(&self) -> bool {
        self.assemblies.iter().any(Assembly::has_failures)
    }
}

/// The run of a single test assembly.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Assembly {
    /// The file name of the assembly.
    pub name: String,

    /// The environment the assembly ran in (e.g. `64-bit .NET 8.0`).
    pub environment: String,

    /// The target framework the assembly was compiled for.
    pub target_framework: String,

    /// The test framework that ran the assembly.
    pub test_framework: String,

    pub error_count: u32,
    pub passed_count: u32,
    pub failed_count: u32,
    pub skipped_count: u32,
    pub not_run_count: u32,
    pub total_count: u32,

    /// The date the run started.
    pub run_date: String,

    /// The time of day the run started.
    pub run_time: String,

    /// The number of seconds the assembly took to run.
    pub time: f64,

    /// The time spent running the assembly, as a formatted duration.
    pub time_rtf: String,

    /// The tests of the assembly, grouped per trait.
    pub test_groups: Vec<TestGroup>,

    /// Failures that happened outside the scope of a single test.
    pub environment_errors: Vec<EnvironmentError>,
}

impl Assembly {
    /// Returns true if the assembly reports failed tests or errors.
    pub fn has_failures(&self) -> bool {
        self.failed_count > 0 || self.error_count > 0
    }
}

/// A single test, ready to be displayed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestRecord {
    /// The name of the test, in human-readable format.
    pub name: String,

    /// The status of the test.
    pub result: TestOutcome,

    /// The number of seconds the test took to run.
    pub time: f64,

    /// Why the test was skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Why the test failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<Failure>,
}

/// Outcome of a single test as reported by xUnit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestOutcome {
    Pass,
    Fail,
    Skip,
    NotRun,
    /// A value this tool doesn't know about, kept verbatim.
    Other(String),
}

impl TestOutcome {
    pub fn as_str(&self) -> &str {
        match self {
            TestOutcome::Pass => "Pass",
            TestOutcome::Fail => "Fail",
            TestOutcome::Skip => "Skip",
            TestOutcome::NotRun => "NotRun",
            TestOutcome::Other(s) => s,
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, TestOutcome::Pass)
    }
}

impl From<&str> for TestOutcome {
    fn from(value: &str) -> Self {
        match value {
            "Pass" => TestOutcome::Pass,
            "Fail" => TestOutcome::Fail,
            "Skip" => TestOutcome::Skip,
            "NotRun" => TestOutcome::NotRun,
            other => TestOutcome::Other(other.to_string()),
        }
    }
}

impl fmt::Display for TestOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TestOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Details about a failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Failure {
    pub exception_type: String,
    pub message: String,
    pub stack_trace: String,
}

impl From<schema::Failure> for Failure {
    fn from(raw: schema::Failure) -> Self {
        Self {
            exception_type: raw.exception_type,
            message: raw.message.trim().to_string(),
            stack_trace: raw.stack_trace.trim().to_string(),
        }
    }
}

/// A failure outside the scope of a single test.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EnvironmentError {
    /// The name of the item that failed (e.g. a fixture).
    pub name: String,

    /// The kind of error (e.g. `fixture-dispose`).
    pub error_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<Failure>,
}

/// Load a test run from `rdr`.
pub fn load<R: Read>(mut rdr: R, naming: &NamingConfig) -> XunitResult<TestRun> {
    let mut content = String::new();
    rdr.read_to_string(&mut content)?;

    load_str(&content, naming)
}

/// Load a test run from the file at `path`.
pub fn load_file(path: &Path, naming: &NamingConfig) -> XunitResult<TestRun> {
    let content = std::fs::read_to_string(path)?;
    let run = load_str(&content, naming)?;

    debug!(
        "Loaded {} assemblies from {}",
        run.assemblies.len(),
        path.display()
    );

    Ok(run)
}

/// Load a test run from an XML string.
pub fn load_str(xml: &str, naming: &NamingConfig) -> XunitResult<TestRun> {
    let root = root_element(xml)?;
    if root != "assemblies" {
        return Err(XunitError::UnexpectedRoot(root));
    }

    let raw: schema::Assemblies = quick_xml::de::from_str(xml)?;

    Ok(read_run(raw, naming))
}

/// Returns the name of the document's root element.
fn root_element(xml: &str) -> XunitResult<String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) => {
                return Ok(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());
            }
            Event::Decl(_) | Event::Comment(_) | Event::PI(_) | Event::DocType(_) => {}
            Event::Text(e) if e.iter().all(u8::is_ascii_whitespace) => {}
            Event::Eof => return Err(XunitError::Malformed("no root element".to_string())),
            _ => {
                return Err(XunitError::Malformed(
                    "content before the root element".to_string(),
                ));
            }
        }
    }
}

fn read_run(raw: schema::Assemblies, naming: &NamingConfig) -> TestRun {
    TestRun {
        computer: raw.computer,
        user: raw.user,
        start_time_rtf: raw.start_rtf,
        end_time_rtf: raw.finish_rtf,
        timestamp: raw.timestamp,
        assemblies: raw
            .assemblies
            .into_iter()
            .map(|assembly| read_assembly(assembly, naming))
            .collect(),
    }
}

fn read_assembly(raw: schema::Assembly, naming: &NamingConfig) -> Assembly {
    let name = assembly_name(&raw.name).to_string();

    let tests: Vec<DecodedTest> = raw
        .collections
        .into_iter()
        .flat_map(|collection| collection.tests)
        .map(|test| decode(test, naming))
        .collect();

    if tests.is_empty() {
        debug!("Assembly {} contains no tests", name);
    }

    Assembly {
        name,
        environment: raw.environment,
        target_framework: raw.target_framework,
        test_framework: raw.test_framework,
        error_count: raw.error_count,
        passed_count: raw.passed_count,
        failed_count: raw.failed_count,
        skipped_count: raw.skipped_count,
        not_run_count: raw.not_run_count,
        total_count: raw.total,
        run_date: raw.run_date,
        run_time: raw.run_time,
        time: raw.time,
        time_rtf: raw.time_rtf,
        test_groups: group_tests(&tests),
        environment_errors: raw
            .error_set
            .errors
            .into_iter()
            .map(|e| EnvironmentError {
                name: e.name,
                error_type: e.error_type,
                failure: e.failure.map(Failure::from),
            })
            .collect(),
    }
}

/// Decode a raw test into its display form, group path and trait labels.
fn decode(raw: schema::Test, naming: &NamingConfig) -> DecodedTest {
    DecodedTest {
        path: name::group_path(&raw.name, naming),
        traits: raw
            .trait_set
            .traits
            .iter()
            .map(|t| name::trait_label(&t.name, &t.value))
            .collect(),
        record: TestRecord {
            name: name::friendly_name(&raw.name, naming),
            result: TestOutcome::from(raw.result.as_str()),
            time: raw.time,
            reason: raw
                .reason
                .map(|r| r.trim().to_string())
                .filter(|r| !r.is_empty()),
            failure: raw.failure.map(Failure::from),
        },
    }
}

/// Returns the file name of an assembly path, for both `/` and `\` separators.
fn assembly_name(path: &str) -> &str {
    let separator = if path.contains('/') { '/' } else { '\\' };

    path.rsplit_once(separator).map_or(path, |(_, file)| file)
}
