//! Launcher configuration for ttyd-launch.
//!
//! This module holds the default program names used to run generated scripts
//! and the [`LauncherSettings`] that callers may override.

use crate::quoting::RemoteQuoting;

/// Shell started by the shell script when `SHELL` is unset or empty
pub const DEFAULT_SHELL: &str = "bash";

/// Interpreter used to run generated scripts, locally and on remote hosts
pub const DEFAULT_INTERPRETER: &str = "python3";

/// Secure-shell client used for remote execution
pub const DEFAULT_SSH_CLIENT: &str = "ssh";

/// Exit code reported when the interpreter or SSH client could not be started
pub const LAUNCH_FAILURE_EXIT_CODE: u8 = 125;

/// Programs and quoting used to turn a script into a process invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherSettings {
    /// Local interpreter, invoked as `<interpreter> -c <script>`.
    pub interpreter: String,
    /// Interpreter invoked on the remote host.
    pub remote_interpreter: String,
    /// Secure-shell client program.
    pub ssh_client: String,
    /// How the script is quoted for the shell(s) between SSH and the remote interpreter.
    pub remote_quoting: RemoteQuoting,
}

impl Default for LauncherSettings {
    fn default() -> Self {
        Self {
            interpreter: DEFAULT_INTERPRETER.to_string(),
            remote_interpreter: DEFAULT_INTERPRETER.to_string(),
            ssh_client: DEFAULT_SSH_CLIENT.to_string(),
            remote_quoting: RemoteQuoting::default(),
        }
    }
}

/// Expands shell variables in a local program path.
///
/// Only `~` is expanded, so `~/bin/ssh` becomes an absolute path while bare
/// program names like `ssh` are left for the `PATH` lookup.
///
/// # Arguments
///
/// * `program` - Program name or path that may start with `~`
///
/// # Returns
///
/// The expanded program path
///
/// # Examples
///
/// ```
/// use ttyd_launch_core::config::expand_program_path;
///
/// assert_eq!(expand_program_path("ssh"), "ssh");
/// assert!(!expand_program_path("~/bin/ssh").starts_with('~'));
/// ```
pub fn expand_program_path(program: &str) -> String {
    shellexpand::tilde(program).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = LauncherSettings::default();
        assert_eq!(settings.interpreter, "python3");
        assert_eq!(settings.remote_interpreter, "python3");
        assert_eq!(settings.ssh_client, "ssh");
        assert_eq!(settings.remote_quoting.layers, 1);
    }

    #[test]
    fn test_expand_program_path_with_tilde() {
        let result = expand_program_path("~/bin/ssh");
        assert!(!result.starts_with('~'));
        assert!(result.ends_with("bin/ssh"));
    }

    #[test]
    fn test_expand_program_path_without_tilde() {
        assert_eq!(expand_program_path("/usr/bin/ssh"), "/usr/bin/ssh");
        assert_eq!(expand_program_path("sh"), "sh");
    }

    #[test]
    fn test_default_shell_constant() {
        assert_eq!(DEFAULT_SHELL, "bash");
    }

    #[test]
    fn test_launch_failure_code_is_not_success() {
        assert_ne!(LAUNCH_FAILURE_EXIT_CODE, 0);
    }
}
