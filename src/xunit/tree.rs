//! Grouping of tests into a tree.
//!
//! Every test ends up under one root per trait it declares (or under the
//! root with the empty label when it declares none). Below a root, nested
//! tests are placed according to their group path; tests that share a path
//! prefix share the nodes of that prefix:
//!
//! ```text
//! ""                                   <- root (no trait)
//! ├── A test with a display name.
//! └── Test class
//!     └── Method
//!         ├── Scenario
//!         │   └── Sub scenario
//!         │       └── Result
//!         └── Scenario2
//!             └── Sub scenario
//!                 └── Result
//! ```

use serde::Serialize;

use super::TestRecord;

/// A test, decoded and ready to be placed in the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedTest {
    /// The groups the test belongs to, outermost first.
    pub path: Vec<String>,

    /// The test itself.
    pub record: TestRecord,

    /// Labels of the traits the test declares, in declaration order.
    pub traits: Vec<String>,
}

/// A named group of tests and subgroups.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TestGroup {
    /// The name of the group.
    pub name: String,

    /// The tests directly in this group, in encounter order.
    pub tests: Vec<TestRecord>,

    /// The subgroups of this group, in first-seen order.
    pub groups: Vec<TestGroup>,
}

impl TestGroup {
    /// Create an empty group.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tests: Vec::new(),
            groups: Vec::new(),
        }
    }

    /// Place `record` at the end of `path`, below this group.
    ///
    /// Existing subgroups are reused, missing ones are appended.
    pub fn insert(&mut self, path: &[String], record: TestRecord) {
        match path.split_first() {
            None => self.tests.push(record),
            Some((name, rest)) => self.subgroup_mut(name).insert(rest, record),
        }
    }

    /// Returns the subgroup called `name`, creating it if needed.
    fn subgroup_mut(&mut self, name: &str) -> &mut TestGroup {
        let idx = match self.groups.iter().position(|g| g.name == name) {
            Some(idx) => idx,
            None => {
                self.groups.push(TestGroup::new(name));
                self.groups.len() - 1
            }
        };

        &mut self.groups[idx]
    }

    /// Returns the subgroup called `name`, if any.
    pub fn subgroup(&self, name: &str) -> Option<&TestGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Total number of tests in this group and all of its subgroups.
    pub fn test_count(&self) -> usize {
        self.tests.len() + self.groups.iter().map(TestGroup::test_count).sum::<usize>()
    }
}

/// Build the trait roots for the tests of one assembly.
///
/// Roots are ordered by the first test that declares their trait. A test that
/// declares the same trait more than once is only placed once under it.
pub fn group_tests(tests: &[DecodedTest]) -> Vec<TestGroup> {
    let mut by_trait: Vec<(&str, Vec<&DecodedTest>)> = Vec::new();

    for test in tests {
        if test.traits.is_empty() {
            add_to_trait(&mut by_trait, "", test);
        }

        for (idx, label) in test.traits.iter().enumerate() {
            if test.traits[..idx].contains(label) {
                continue;
            }
            add_to_trait(&mut by_trait, label, test);
        }
    }

    by_trait
        .into_iter()
        .map(|(label, tests)| {
            let mut root = TestGroup::new(label);
            for test in tests {
                root.insert(&test.path, test.record.clone());
            }
            root
        })
        .collect()
}

fn add_to_trait<'t>(
    by_trait: &mut Vec<(&'t str, Vec<&'t DecodedTest>)>,
    label: &'t str,
    test: &'t DecodedTest,
) {
    match by_trait.iter_mut().find(|(l, _)| *l == label) {
        Some((_, tests)) => tests.push(test),
        None => by_trait.push((label, vec![test])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xunit::TestOutcome;

    fn record(name: &str) -> TestRecord {
        TestRecord {
            name: name.to_string(),
            result: TestOutcome::Pass,
            time: 0.01,
            reason: None,
            failure: None,
        }
    }

    fn decoded(name: &str, path: &[&str], traits: &[&str]) -> DecodedTest {
        DecodedTest {
            path: path.iter().map(|p| p.to_string()).collect(),
            record: record(name),
            traits: traits.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_group_tests_empty() {
        assert!(group_tests(&[]).is_empty());
    }

    #[test]
    fn test_group_tests_without_path() {
        let roots = group_tests(&[decoded("First", &[], &[]), decoded("Second", &[], &[])]);

        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].name, "");
        assert_eq!(roots[0].tests, vec![record("First"), record("Second")]);
        assert!(roots[0].groups.is_empty());
    }

    #[test]
    fn test_group_tests_shares_prefix() {
        let roots = group_tests(&[
            decoded(
                "Result",
                &["Test class", "Method", "Scenario", "Sub scenario"],
                &[],
            ),
            decoded(
                "Result",
                &["Test class", "Method", "Scenario2", "Sub scenario"],
                &[],
            ),
        ]);

        assert_eq!(roots.len(), 1);
        let root = &roots[0];
        assert_eq!(root.groups.len(), 1);

        let method = root
            .subgroup("Test class")
            .and_then(|g| g.subgroup("Method"))
            .unwrap();
        assert!(method.tests.is_empty());
        assert_eq!(method.groups.len(), 2);
        assert_eq!(method.groups[0].name, "Scenario");
        assert_eq!(method.groups[1].name, "Scenario2");

        for scenario in &method.groups {
            let sub = scenario.subgroup("Sub scenario").unwrap();
            assert_eq!(sub.tests, vec![record("Result")]);
        }
        assert_eq!(root.test_count(), 2);
    }

    #[test]
    fn test_group_tests_tests_on_intermediate_nodes() {
        let roots = group_tests(&[
            decoded("Deep", &["Outer", "Inner"], &[]),
            decoded("Shallow", &["Outer"], &[]),
        ]);

        let outer = roots[0].subgroup("Outer").unwrap();
        assert_eq!(outer.tests, vec![record("Shallow")]);
        assert_eq!(outer.subgroup("Inner").unwrap().tests, vec![record("Deep")]);
    }

    #[test]
    fn test_group_tests_multiple_traits() {
        let roots = group_tests(&[
            decoded("Plain", &[], &[]),
            decoded("Unit", &[], &["Category - Unit"]),
            decoded("Both", &["Group"], &["Category - Unit", "Timing - Slow"]),
        ]);

        let names: Vec<&str> = roots.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["", "Category - Unit", "Timing - Slow"]);

        assert_eq!(roots[1].tests, vec![record("Unit")]);
        assert_eq!(
            roots[1].subgroup("Group").unwrap().tests,
            roots[2].subgroup("Group").unwrap().tests
        );
        assert_eq!(roots[2].test_count(), 1);
    }

    #[test]
    fn test_group_tests_root_order_follows_first_seen_trait() {
        let roots = group_tests(&[
            decoded("A", &[], &["Timing - Slow"]),
            decoded("B", &[], &[]),
            decoded("C", &[], &["Category - Unit"]),
        ]);

        let names: Vec<&str> = roots.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Timing - Slow", "", "Category - Unit"]);
    }

    #[test]
    fn test_group_tests_duplicate_trait_declaration() {
        let roots = group_tests(&[decoded("A", &[], &["Category - Unit", "Category - Unit"])]);

        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].tests.len(), 1);
    }
}
