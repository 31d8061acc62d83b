//! Raw xUnit v2+ XML schema.
//!
//! These types mirror the XML document one to one and are only used to
//! deserialize it with `quick-xml`'s serde support. Attributes are mapped
//! with an `@` prefix, child elements by their element name. Every field is
//! optional in the document; missing values fall back to their defaults.
//!
//! The format is documented at <https://xunit.net/docs/format-xml-v2>.

use serde::Deserialize;

/// The `<assemblies>` root element.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Assemblies {
    #[serde(rename = "@computer", default)]
    pub computer: String,
    #[serde(rename = "@user", default)]
    pub user: String,
    #[serde(rename = "@start-rtf", default)]
    pub start_rtf: String,
    #[serde(rename = "@finish-rtf", default)]
    pub finish_rtf: String,
    #[serde(rename = "@timestamp", default)]
    pub timestamp: String,
    #[serde(rename = "assembly", default)]
    pub assemblies: Vec<Assembly>,
}

/// A single test assembly, including its environment.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Assembly {
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "@environment", default)]
    pub environment: String,
    #[serde(rename = "@errors", default)]
    pub error_count: u32,
    #[serde(rename = "@failed", default)]
    pub failed_count: u32,
    #[serde(rename = "@passed", default)]
    pub passed_count: u32,
    #[serde(rename = "@skipped", default)]
    pub skipped_count: u32,
    #[serde(rename = "@not-run", default)]
    pub not_run_count: u32,
    #[serde(rename = "@total", default)]
    pub total: u32,
    #[serde(rename = "@run-date", default)]
    pub run_date: String,
    #[serde(rename = "@run-time", default)]
    pub run_time: String,
    #[serde(rename = "@time", default)]
    pub time: f64,
    #[serde(rename = "@time-rtf", default)]
    pub time_rtf: String,
    #[serde(rename = "@target-framework", default)]
    pub target_framework: String,
    #[serde(rename = "@test-framework", default)]
    pub test_framework: String,
    #[serde(rename = "collection", default)]
    pub collections: Vec<Collection>,
    #[serde(rename = "errors", default)]
    pub error_set: ErrorSet,
}

/// A test collection inside an assembly.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Collection {
    #[serde(rename = "test", default)]
    pub tests: Vec<Test>,
}

/// A single test run.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Test {
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "@result", default)]
    pub result: String,
    #[serde(rename = "@time", default)]
    pub time: f64,
    #[serde(rename = "failure")]
    pub failure: Option<Failure>,
    #[serde(rename = "reason")]
    pub reason: Option<String>,
    #[serde(rename = "traits", default)]
    pub trait_set: TraitSet,
}

/// Details about a failed test or environment error.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Failure {
    #[serde(rename = "@exception-type", default)]
    pub exception_type: String,
    #[serde(rename = "message", default)]
    pub message: String,
    #[serde(rename = "stack-trace", default)]
    pub stack_trace: String,
}

/// The `<traits>` element of a test.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct TraitSet {
    #[serde(rename = "trait", default)]
    pub traits: Vec<Trait>,
}

/// A single name/value pair attached to a test.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Trait {
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "@value", default)]
    pub value: String,
}

/// The `<errors>` element of an assembly.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorSet {
    #[serde(rename = "error", default)]
    pub errors: Vec<EnvironmentError>,
}

/// A failure outside the scope of a single test, e.g. an exception thrown
/// while disposing a fixture.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct EnvironmentError {
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "@type", default)]
    pub error_type: String,
    #[serde(rename = "failure")]
    pub failure: Option<Failure>,
}
