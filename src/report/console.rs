//! Console summary of test results.
//!
//! Prints every assembly with its counts, followed by its tests grouped per
//! trait and per nested class:
//!
//! ```text
//!   Assembly:         App.Tests.dll - ✓ Passed (3 of 3 passed).
//!   ...
//!   🚀 ✓ A test with a display name. (0.001 seconds)
//!
//!   Test class
//!     Method
//!        🐌 ✓ Result (0.25 seconds)
//! ```
//!
//! Each test is prefixed with a timing badge (see
//! [`ReportConfig`](crate::config::ReportConfig)) and its status.

use std::fmt;
use std::io::{self, Write};
use std::path::Path;

use console::{StyledObject, style};

use super::Reporter;
use crate::config::ReportConfig;
use crate::xunit::{Assembly, TestGroup, TestOutcome, TestRecord, TestRun};

const BANNER: &[&str] = &[
    "    _  _ ___ _____   _____       _    __   ___              _ _            ",
    "   | \\| | __|_   _| |_   _|__ __| |_  \\ \\ / (_)____  _ __ _| (_)______ _ _ ",
    "  _| .` | _|  | |     | |/ -_|_-<  _|  \\ V /| (_-< || / _` | | |_ / -_) '_|",
    " (_)_|\\_|___| |_|     |_|\\___/__/\\__|   \\_/ |_/__/\\_,_\\__,_|_|_/__\\___|_|  ",
];

/// Reporter that prints a human-readable summary.
pub struct ConsoleReporter<W: Write> {
    target: W,
    report: ReportConfig,
    verbose: bool,
}

impl ConsoleReporter<io::Stdout> {
    /// Create a console reporter that prints to stdout.
    pub fn stdout(report: ReportConfig, verbose: bool) -> Self {
        Self::new(io::stdout(), report, verbose)
    }
}

impl<W: Write> ConsoleReporter<W> {
    /// Create a console reporter that writes to `target`.
    ///
    /// With `verbose`, failure messages and skip reasons are printed below
    /// their test.
    pub fn new(target: W, report: ReportConfig, verbose: bool) -> Self {
        Self {
            target,
            report,
            verbose,
        }
    }

    /// Print the ASCII header.
    pub fn write_banner(&mut self) -> io::Result<()> {
        for line in BANNER {
            writeln!(self.target, "{}", line)?;
        }
        writeln!(self.target)
    }

    /// Consume the reporter, returning its target.
    pub fn into_inner(self) -> W {
        self.target
    }

    fn write_run(&mut self, source: &Path, run: &TestRun) -> io::Result<()> {
        writeln!(self.target, "Input source:         {}", source.display())?;
        writeln!(self.target, "Amount of assemblies: {}", run.assemblies.len())?;

        if !run.computer.is_empty() {
            writeln!(self.target, "Computer:             {}", run.computer)?;
        }

        if !run.user.is_empty() {
            writeln!(self.target, "User:                 {}", run.user)?;
        }

        if !run.start_time_rtf.is_empty() {
            writeln!(self.target, "Start time:           {}", run.start_time_rtf)?;
        }

        if let Some(end_time) = run.end_time() {
            writeln!(self.target, "End time:             {}", end_time)?;
        }

        for assembly in &run.assemblies {
            self.write_assembly(assembly)?;
        }

        writeln!(self.target)
    }

    fn write_assembly(&mut self, assembly: &Assembly) -> io::Result<()> {
        writeln!(self.target)?;

        let verdict = if assembly.failed_count != 0 {
            style(format!(
                "⛌ Failed ({} of {} failed).",
                assembly.failed_count, assembly.total_count
            ))
            .red()
            .bold()
        } else {
            style(format!(
                "✓ Passed ({} of {} passed).",
                assembly.passed_count, assembly.total_count
            ))
            .green()
            .bold()
        };
        writeln!(self.target, "  Assembly:         {} - {}", assembly.name, verdict)?;

        if !assembly.target_framework.is_empty() {
            writeln!(self.target, "  Framework:        {}", assembly.target_framework)?;
        }

        writeln!(
            self.target,
            "  Date / time:      {} {}",
            assembly.run_date, assembly.run_time
        )?;

        if assembly.time_rtf.is_empty() {
            writeln!(self.target, "  Total time:       {} seconds.", assembly.time)?;
        } else {
            writeln!(self.target, "  Total time:       {}.", assembly.time_rtf)?;
        }

        writeln!(self.target)?;
        writeln!(self.target, "  # tests:         {}", assembly.total_count)?;
        writeln!(self.target, "  # Passed tests:  {}", assembly.passed_count)?;
        writeln!(self.target, "  # Failed tests:  {}", assembly.failed_count)?;
        writeln!(self.target, "  # Skipped tests: {}", assembly.skipped_count)?;
        writeln!(self.target, "  # Errors:        {}", assembly.error_count)?;
        writeln!(self.target)?;

        for error in &assembly.environment_errors {
            writeln!(
                self.target,
                "  {} {} ({})",
                style("⚠").red().bold(),
                error.name,
                error.error_type
            )?;
            if let Some(failure) = &error.failure {
                self.write_lines("      ", &failure.message)?;
            }
        }

        for root in &assembly.test_groups {
            self.write_root(root)?;
        }

        Ok(())
    }

    /// Print a trait root. Tests without a trait are printed without header.
    fn write_root(&mut self, root: &TestGroup) -> io::Result<()> {
        let indent = if root.name.is_empty() {
            ""
        } else {
            writeln!(self.target)?;
            writeln!(self.target, "  Trait: {}", root.name)?;
            "  "
        };

        for test in &root.tests {
            self.write_test(&format!("{}  ", indent), test)?;
        }

        for group in &root.groups {
            writeln!(self.target)?;
            self.write_group(group, "")?;
        }

        Ok(())
    }

    fn write_group(&mut self, group: &TestGroup, indent: &str) -> io::Result<()> {
        writeln!(self.target, "{}  {}", indent, group.name)?;

        for test in &group.tests {
            self.write_test(&format!("{}     ", indent), test)?;
        }

        if !group.tests.is_empty() {
            writeln!(self.target)?;
        }

        let nested = format!("{}  ", indent);
        for subgroup in &group.groups {
            self.write_group(subgroup, &nested)?;
        }

        Ok(())
    }

    fn write_test(&mut self, indent: &str, test: &TestRecord) -> io::Result<()> {
        writeln!(
            self.target,
            "{}{} {} {} ({} seconds)",
            indent,
            self.report.badge(test.time).symbol(),
            status_mark(&test.result),
            test.name,
            test.time
        )?;

        if !self.verbose {
            return Ok(());
        }

        let detail_indent = format!("{}     ", indent);
        if let Some(failure) = &test.failure {
            if !failure.exception_type.is_empty() {
                writeln!(
                    self.target,
                    "{}{}",
                    detail_indent,
                    style(&failure.exception_type).red()
                )?;
            }
            self.write_lines(&detail_indent, &failure.message)?;
        }
        if let Some(reason) = &test.reason {
            self.write_lines(&detail_indent, reason)?;
        }

        Ok(())
    }

    fn write_lines(&mut self, indent: &str, text: &str) -> io::Result<()> {
        for line in text.lines() {
            writeln!(self.target, "{}{}", indent, style(line).dim())?;
        }
        Ok(())
    }
}

fn status_mark(outcome: &TestOutcome) -> StyledObject<&'static str> {
    match outcome {
        TestOutcome::Pass => style("✓").green().bold(),
        TestOutcome::Skip => style("↷").yellow().bold(),
        _ => style("⛌").red().bold(),
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn report(&mut self, source: &Path, run: &TestRun) -> io::Result<()> {
        self.write_run(source, run)
    }

    fn report_error(&mut self, source: &Path, error: &dyn fmt::Display) -> io::Result<()> {
        writeln!(
            self.target,
            "{} - {}: {}",
            style("Failed").red().bold(),
            source.display(),
            error
        )?;
        writeln!(self.target)
    }

    fn finish(&mut self) -> io::Result<()> {
        self.target.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NamingConfig;
    use crate::xunit::Failure;

    const DOCUMENT: &str = r#"<assemblies computer="WIN11" user="Kevin" timestamp="07/10/2023 20:53:19">
  <assembly name="C:\Tests\App.Tests.dll" failed="1" passed="2" total="3" run-date="07/10/2023" run-time="20:53:19" time="0.4">
    <collection>
      <test name="A test with a display name." result="Pass" time="0.001" />
      <test name="App.Tests.CalculatorTests+WhenDividing+ByZero.Throws" result="Fail" time="0.07">
        <failure exception-type="System.DivideByZeroException">
          <message>Attempted to divide by zero.</message>
        </failure>
      </test>
      <test name="App.Tests.CalculatorTests.AddsNumbers" result="Pass" time="0.3">
        <traits>
          <trait name="Category" value="Unit" />
        </traits>
      </test>
    </collection>
  </assembly>
</assemblies>"#;

    fn render(run: &TestRun, verbose: bool) -> String {
        let mut reporter = ConsoleReporter::new(Vec::new(), ReportConfig::default(), verbose);
        reporter.report(Path::new("results.xml"), run).unwrap();
        reporter.finish().unwrap();

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        console::strip_ansi_codes(&output).into_owned()
    }

    fn load() -> TestRun {
        crate::xunit::load_str(DOCUMENT, &NamingConfig::default()).unwrap()
    }

    #[test]
    fn test_console_header() {
        let output = render(&load(), false);

        assert!(output.contains("Input source:         results.xml"));
        assert!(output.contains("Amount of assemblies: 1"));
        assert!(output.contains("Computer:             WIN11"));
        assert!(output.contains("End time:             07/10/2023 20:53:19"));
        assert!(!output.contains("Start time:"));
    }

    #[test]
    fn test_console_assembly_summary() {
        let output = render(&load(), false);

        assert!(output.contains("Assembly:         App.Tests.dll - ⛌ Failed (1 of 3 failed)."));
        assert!(output.contains("Total time:       0.4 seconds."));
        assert!(output.contains("# Failed tests:  1"));
    }

    #[test]
    fn test_console_grouped_tests() {
        let output = render(&load(), false);
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines.contains(&"  🚀 ✓ A test with a display name. (0.001 seconds)"));
        assert!(lines.contains(&"  Calculator tests"));
        assert!(lines.contains(&"    When dividing"));
        assert!(lines.contains(&"      By zero"));
        assert!(lines.contains(&"         🕐 ⛌ Throws (0.07 seconds)"));
        assert!(lines.contains(&"  Trait: Category - Unit"));
        assert!(lines.contains(&"    🐌 ✓ Adds numbers (0.3 seconds)"));
        assert!(!output.contains("Attempted to divide by zero."));
    }

    #[test]
    fn test_console_verbose_failure() {
        let output = render(&load(), true);

        assert!(output.contains("System.DivideByZeroException"));
        assert!(output.contains("Attempted to divide by zero."));
    }

    #[test]
    fn test_console_passed_assembly() {
        let run = TestRun {
            assemblies: vec![Assembly {
                name: "App.dll".to_string(),
                passed_count: 2,
                total_count: 2,
                time_rtf: "00:00:01.5".to_string(),
                test_groups: vec![TestGroup {
                    name: String::new(),
                    tests: vec![TestRecord {
                        name: "Skipped test".to_string(),
                        result: TestOutcome::Skip,
                        time: 0.0,
                        reason: Some("Flaky on CI".to_string()),
                        failure: None,
                    }],
                    groups: Vec::new(),
                }],
                ..Default::default()
            }],
            ..Default::default()
        };

        let output = render(&run, true);
        assert!(output.contains("App.dll - ✓ Passed (2 of 2 passed)."));
        assert!(output.contains("Total time:       00:00:01.5."));
        assert!(output.contains("🚀 ↷ Skipped test (0 seconds)"));
        assert!(output.contains("Flaky on CI"));
    }

    #[test]
    fn test_console_report_error() {
        let mut reporter = ConsoleReporter::new(Vec::new(), ReportConfig::default(), false);
        reporter
            .report_error(Path::new("broken.xml"), &"no root element")
            .unwrap();

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        let output = console::strip_ansi_codes(&output);
        assert!(output.contains("Failed - broken.xml: no root element"));
    }

    #[test]
    fn test_console_environment_errors() {
        let run = TestRun {
            assemblies: vec![Assembly {
                name: "App.dll".to_string(),
                error_count: 1,
                environment_errors: vec![crate::xunit::EnvironmentError {
                    name: "App.DatabaseFixture".to_string(),
                    error_type: "fixture-dispose".to_string(),
                    failure: Some(Failure {
                        message: "Connection already closed".to_string(),
                        ..Default::default()
                    }),
                }],
                ..Default::default()
            }],
            ..Default::default()
        };

        let output = render(&run, false);
        assert!(output.contains("⚠ App.DatabaseFixture (fixture-dispose)"));
        assert!(output.contains("Connection already closed"));
    }

    #[test]
    fn test_banner() {
        let mut reporter = ConsoleReporter::new(Vec::new(), ReportConfig::default(), false);
        reporter.write_banner().unwrap();

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(output.lines().count(), BANNER.len() + 1);
    }
}
