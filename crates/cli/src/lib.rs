//! ttyd-launch CLI Library
//!
//! This crate provides the command-line interface for ttyd-launch, the helper a
//! web terminal front-end uses to run a command or start a shell, locally or
//! on a remote host over SSH.
//!
//! # Architecture
//!
//! - [`cli_args`]: The `ttyd-run` and `ttyd-shell` argument surfaces
//! - [`arguments`]: Value parsers for `--env` and `--cmd`
//! - [`launcher`]: Planning, dry runs, execution and exit codes
//!
//! # Examples
//!
//! ```bash
//! # Run a command locally
//! ttyd-run --cmd "echo hello"
//!
//! # Run a command on a remote host
//! ttyd-run --ssh user@host --ssh -p --ssh 2222 --argv hostname
//!
//! # Start a shell whose history already holds a command
//! ttyd-shell --history "make test" --cwd ~/project
//!
//! # Show what would run, without running it
//! ttyd-run --dry-run --ssh user@host --cmd "ls -la"
//! ```
//!
//! The process exits with the command's (or shell's) exit code, with `2` for
//! usage errors and `125` if the interpreter or SSH client cannot be started.

pub mod arguments;
pub mod cli_args;
pub mod launcher;
