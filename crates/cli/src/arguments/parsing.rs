//! Parsers used as clap `value_parser`s.

use ttyd_launch_core::environment::split_assignment;

/// A command line split into words by POSIX shell rules.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLine(pub Vec<String>);

/// Parses a `NAME=VALUE` environment assignment.
///
/// The argument is split on its first `=`; without one the value is empty.
/// Any non-empty name is accepted, including ones a shell could not export
/// such as `MY-VAR`.
///
/// # Errors
///
/// Returns a message if the name is empty.
///
/// # Examples
///
/// ```rust
/// use ttyd_launch_cli::arguments::parse_env_assignment;
///
/// let (name, value) = parse_env_assignment("GREETING=hello=world").unwrap();
/// assert_eq!(name, "GREETING");
/// assert_eq!(value, "hello=world");
/// ```
pub fn parse_env_assignment(assignment: &str) -> Result<(String, String), String> {
    let (name, value) = split_assignment(assignment);
    if name.is_empty() {
        return Err("environment variable name is empty".to_string());
    }
    Ok((name, value))
}

/// Splits a `--cmd` string into arguments with POSIX shell quoting rules.
///
/// # Errors
///
/// Returns a message if the quoting is unbalanced or no words remain.
///
/// # Examples
///
/// ```rust
/// use ttyd_launch_cli::arguments::parse_command_line;
///
/// let command = parse_command_line("echo 'hello world'").unwrap();
/// assert_eq!(command.0, vec!["echo", "hello world"]);
/// ```
pub fn parse_command_line(command: &str) -> Result<CommandLine, String> {
    let words = shlex::split(command)
        .ok_or_else(|| "cannot split command: unterminated quote or trailing escape".to_string())?;

    if words.is_empty() {
        return Err("command is empty".to_string());
    }

    Ok(CommandLine(words))
}
