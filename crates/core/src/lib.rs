//! ttyd-launch Core Library
//!
//! This crate provides the core functionality for ttyd-launch, a helper used by
//! web terminal front-ends to run a command or start a shell, either locally
//! or on a remote host over SSH.
//!
//! # Key Features
//!
//! - **Invocation Model**: Working directory, environment overrides, SSH arguments and payload
//! - **Script Generation**: Small Python drivers that run a command or a seeded shell
//! - **Literal Encoding**: String literals for script data, shell quoting for the SSH hop
//! - **Launch Planning**: Local `python3 -c` or SSH invocation, with configurable remote quoting
//! - **Execution**: Inherited standard streams and exact exit code propagation
//!
//! # Examples
//!
//! Planning a command on a remote host:
//!
//! ```
//! use ttyd_launch_core::config::LauncherSettings;
//! use ttyd_launch_core::environment::Environment;
//! use ttyd_launch_core::invocation::{Invocation, Payload};
//!
//! let invocation = Invocation {
//!     cwd: Some("/srv/app".to_string()),
//!     env: Environment::new(),
//!     ssh: Some(vec!["user@host".to_string()]),
//!     payload: Payload::Command(vec!["hostname".to_string()]),
//! };
//!
//! let plan = invocation.plan(&LauncherSettings::default())?;
//! assert_eq!(plan.program, "ssh");
//! # Ok::<(), ttyd_launch_core::error::Error>(())
//! ```

pub mod config;
pub mod environment;
pub mod error;
pub mod execution;
pub mod invocation;
pub mod launch;
pub mod quoting;
pub mod script;
