//! Value parsing for ttyd-launch command-line arguments.
//!
//! This module turns the raw strings given to `--env` and `--cmd` into typed
//! values. Failures are reported by clap as usage errors, so no process is
//! started for a malformed request.

pub mod parsing;

// Re-exports for convenience
pub use parsing::parse_command_line;
pub use parsing::parse_env_assignment;
pub use parsing::CommandLine;
