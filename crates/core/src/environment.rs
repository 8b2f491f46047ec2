//! Environment variable overrides.
//!
//! Overrides are layered on top of the environment the generated script
//! inherits; they never replace it. Names are not restricted to shell
//! identifiers.

use indexmap::IndexMap;

/// Environment overrides by variable name. A repeated name keeps the last value.
pub type Environment = IndexMap<String, String>;

/// Splits a `NAME=VALUE` assignment on its first `=`.
///
/// Without an `=`, the whole argument is the name and the value is empty.
///
/// # Examples
///
/// ```
/// use ttyd_launch_core::environment::split_assignment;
///
/// assert_eq!(split_assignment("A=b=c"), ("A".to_string(), "b=c".to_string()));
/// assert_eq!(split_assignment("A"), ("A".to_string(), String::new()));
/// ```
pub fn split_assignment(assignment: &str) -> (String, String) {
    match assignment.split_once('=') {
        Some((name, value)) => (name.to_string(), value.to_string()),
        None => (assignment.to_string(), String::new()),
    }
}

/// Collects assignments into an [`Environment`], later names overriding earlier ones.
pub fn from_assignments<I>(assignments: I) -> Environment
where
    I: IntoIterator<Item = (String, String)>,
{
    assignments.into_iter().collect()
}
