//! The parsed request: what to run, where, and with which environment.

use crate::config::LauncherSettings;
use crate::environment::Environment;
use crate::error::Result;
use crate::launch::LaunchPlan;
use crate::script::{generate_run_script, generate_shell_script};

/// What the generated script does once it runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Run a command: the executable followed by its arguments.
    Command(Vec<String>),
    /// Start the user's shell with these lines pre-seeded in its history.
    Shell { history: Vec<String> },
}

/// A complete request, as collected from the command line.
///
/// The payload kind and the execution location are independent: both
/// commands and shells can run locally or over SSH.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub cwd: Option<String>,
    pub env: Environment,
    /// Arguments for the SSH client. `None` runs locally.
    pub ssh: Option<Vec<String>>,
    pub payload: Payload,
}

impl Invocation {
    /// Generates the script that carries out this invocation's payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the script cannot be generated, see
    /// [`generate_run_script`] and [`generate_shell_script`].
    pub fn script(&self) -> Result<String> {
        match &self.payload {
            Payload::Command(argv) => generate_run_script(argv, self.cwd.as_deref(), &self.env),
            Payload::Shell { history } => {
                generate_shell_script(history, self.cwd.as_deref(), &self.env)
            }
        }
    }

    /// Generates the script and plans how it is launched.
    ///
    /// # Errors
    ///
    /// Returns an error if the script cannot be generated or quoted.
    pub fn plan(&self, settings: &LauncherSettings) -> Result<LaunchPlan> {
        LaunchPlan::new(&self.script()?, self.ssh.as_deref(), settings)
    }
}
