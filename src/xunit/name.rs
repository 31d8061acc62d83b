//! Decoding of xUnit test names.
//!
//! xUnit reports a test either by its display name, or by its fully
//! qualified .NET name. The latter is the concatenation (with `.`) of the
//! namespace, the class and the method. Nested classes are separated from
//! their parent with `+`:
//!
//! ```text
//! NS1.Class.SubClass.TestClass+Method+Scenario+SubScenario.Result
//! └────── namespace ─────┘ └──────── nested classes ─────┘ └method┘
//! ```
//!
//! C# identifiers can't contain spaces, so any name with a space is a
//! display name and is used as is.

use crate::config::NamingConfig;
use crate::naming::humanize;

/// Returns true if `name` is a display name rather than a qualified name.
pub fn has_display_name(name: &str) -> bool {
    name.contains(' ')
}

/// Returns true if `name` is a qualified name of a test in a nested class.
pub fn is_nested(name: &str) -> bool {
    !has_display_name(name) && name.contains('+')
}

/// Returns the human-readable name of a test.
///
/// Display names are returned unchanged. For qualified names, the method
/// name (the part after the last `.`) is converted into a sentence.
///
/// ```
/// use xunit_viz::config::NamingConfig;
/// use xunit_viz::xunit::name::friendly_name;
///
/// let config = NamingConfig::default();
/// assert_eq!(friendly_name("NS.TestClass.TestMethod", &config), "Test method");
/// assert_eq!(friendly_name("A test with a display name.", &config), "A test with a display name.");
/// ```
pub fn friendly_name(name: &str, config: &NamingConfig) -> String {
    if has_display_name(name) {
        return name.to_string();
    }

    humanize(after_last_dot(name), config)
}

/// Returns the chain of groups a test belongs to, outermost first.
///
/// Only nested tests belong to groups. The chain starts with the outermost
/// class (without its namespace), continues with every nested class and
/// ends with the innermost class (without the method name). Each element is
/// converted into a sentence.
pub fn group_path(name: &str, config: &NamingConfig) -> Vec<String> {
    if !is_nested(name) {
        return Vec::new();
    }

    let chunks: Vec<&str> = name.split('+').collect();
    let Some((first, rest)) = chunks.split_first() else {
        return Vec::new();
    };
    let Some((last, middle)) = rest.split_last() else {
        return Vec::new();
    };

    std::iter::once(after_last_dot(first))
        .chain(middle.iter().copied())
        .chain(std::iter::once(before_first_dot(last)))
        .map(|part| humanize(part, config))
        .collect()
}

/// Returns the label of the group that collects all tests with a trait.
pub fn trait_label(name: &str, value: &str) -> String {
    format!("{} - {}", name, value)
}

fn after_last_dot(s: &str) -> &str {
    s.rsplit_once('.').map_or(s, |(_, tail)| tail)
}

fn before_first_dot(s: &str) -> &str {
    s.split_once('.').map_or(s, |(head, _)| head)
}
