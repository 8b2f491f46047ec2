//! Command-line argument parsing and validation.
//!
//! This module defines the two command surfaces, `ttyd-run` and `ttyd-shell`,
//! using the `clap` crate, and converts parsed arguments into an
//! [`Invocation`] and [`LauncherSettings`].

use clap::{Args, Parser};
use ttyd_launch_core::config::{
    expand_program_path, LauncherSettings, DEFAULT_INTERPRETER, DEFAULT_SSH_CLIENT,
};
use ttyd_launch_core::environment::from_assignments;
use ttyd_launch_core::invocation::{Invocation, Payload};
use ttyd_launch_core::quoting::RemoteQuoting;

use crate::arguments::{parse_command_line, parse_env_assignment, CommandLine};

/// Options shared by both command surfaces.
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Working directory to run the command or shell in.
    ///
    /// A leading `~/` is resolved against `$HOME` on the host that runs it.
    #[arg(long, value_name = "PATH")]
    pub cwd: Option<String>,

    /// Set an environment variable for the command or shell.
    ///
    /// Repeat to set several. A later value for the same name wins.
    #[arg(
        long = "env",
        value_name = "NAME=VALUE",
        value_parser = parse_env_assignment,
        allow_hyphen_values = true
    )]
    pub env: Vec<(String, String)>,

    /// Run on a remote host over SSH instead of locally.
    ///
    /// Each occurrence adds one argument to the SSH command, so
    /// `--ssh user@host --ssh -p --ssh 2222` connects on port 2222.
    #[arg(long = "ssh", value_name = "SSH_ARG", allow_hyphen_values = true)]
    pub ssh: Vec<String>,
}

impl CommonArgs {
    fn invocation(&self, payload: Payload) -> Invocation {
        Invocation {
            cwd: self.cwd.clone(),
            env: from_assignments(self.env.iter().cloned()),
            ssh: if self.ssh.is_empty() {
                None
            } else {
                Some(self.ssh.clone())
            },
            payload,
        }
    }
}

/// Options controlling how the generated script is launched.
#[derive(Args, Debug)]
pub struct LauncherArgs {
    /// Local interpreter used to run the generated script.
    #[arg(long, value_name = "PROGRAM", default_value = DEFAULT_INTERPRETER)]
    pub interpreter: String,

    /// SSH client used for remote execution.
    #[arg(long, value_name = "PROGRAM", default_value = DEFAULT_SSH_CLIENT)]
    pub ssh_client: String,

    /// Number of shells between the SSH client and the remote interpreter.
    ///
    /// The script is quoted once per layer. One layer is the remote login shell.
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub remote_shell_layers: usize,

    /// Perform a dry run, which just prints out the planned command but does not execute it.
    #[arg(long, action)]
    pub dry_run: bool,
}

impl LauncherArgs {
    pub fn settings(&self) -> LauncherSettings {
        LauncherSettings {
            interpreter: expand_program_path(&self.interpreter),
            ssh_client: expand_program_path(&self.ssh_client),
            remote_quoting: RemoteQuoting::new(self.remote_shell_layers),
            ..LauncherSettings::default()
        }
    }
}

/// The command to run: exactly one of `--cmd` or `--argv`.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct CommandSource {
    /// A command, split into arguments using shell quoting rules.
    #[arg(
        long,
        value_name = "STRING",
        value_parser = parse_command_line,
        allow_hyphen_values = true
    )]
    pub cmd: Option<CommandLine>,

    /// One argument of the command. Repeat for the command and each argument.
    #[arg(long, value_name = "TOKEN", allow_hyphen_values = true)]
    pub argv: Vec<String>,
}

impl CommandSource {
    pub fn into_argv(self) -> Vec<String> {
        match self.cmd {
            Some(CommandLine(words)) => words,
            None => self.argv,
        }
    }
}

/// Command-line arguments for `ttyd-run`.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use ttyd_launch_cli::cli_args::RunArgs;
///
/// let args = RunArgs::parse_from(["ttyd-run", "--cmd", "echo hello"]);
/// assert!(args.common.ssh.is_empty());
/// ```
#[derive(Parser, Debug)]
#[command(
    name = "ttyd-run",
    about = "Run a command locally or on a remote host over SSH.",
    term_width = 0
)]
pub struct RunArgs {
    #[command(flatten)]
    pub command: CommandSource,

    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub launcher: LauncherArgs,
}

impl RunArgs {
    pub fn into_parts(self) -> (Invocation, LauncherArgs) {
        let invocation = self
            .common
            .invocation(Payload::Command(self.command.into_argv()));
        (invocation, self.launcher)
    }
}

/// Command-line arguments for `ttyd-shell`.
#[derive(Parser, Debug)]
#[command(
    name = "ttyd-shell",
    about = "Start a shell with pre-seeded history, locally or on a remote host over SSH.",
    term_width = 0
)]
pub struct ShellArgs {
    /// Add a line to the shell's history. Repeat to add additional lines.
    #[arg(long, value_name = "LINE", allow_hyphen_values = true)]
    pub history: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub launcher: LauncherArgs,
}

impl ShellArgs {
    pub fn into_parts(self) -> (Invocation, LauncherArgs) {
        let invocation = self.common.invocation(Payload::Shell {
            history: self.history,
        });
        (invocation, self.launcher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_run_args_cmd() {
        let args = RunArgs::parse_from(["ttyd-run", "--cmd", "echo hello world"]);
        let (invocation, launcher) = args.into_parts();

        assert_eq!(
            invocation.payload,
            Payload::Command(vec![
                "echo".to_string(),
                "hello".to_string(),
                "world".to_string()
            ])
        );
        assert!(invocation.cwd.is_none());
        assert!(invocation.env.is_empty());
        assert!(invocation.ssh.is_none());
        assert!(!launcher.dry_run);
    }

    #[test]
    fn test_run_args_argv() {
        let args = RunArgs::parse_from([
            "ttyd-run", "--argv", "echo", "--argv", "hello world", "--argv", "-n",
        ]);
        let (invocation, _) = args.into_parts();

        assert_eq!(
            invocation.payload,
            Payload::Command(vec![
                "echo".to_string(),
                "hello world".to_string(),
                "-n".to_string()
            ])
        );
    }

    #[test]
    fn test_run_args_cmd_and_argv_conflict() {
        let result = RunArgs::try_parse_from(["ttyd-run", "--cmd", "ls", "--argv", "ls"]);
        assert_eq!(result.unwrap_err().kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_run_args_requires_command() {
        let result = RunArgs::try_parse_from(["ttyd-run", "--cwd", "/tmp"]);
        assert_eq!(
            result.unwrap_err().kind(),
            ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn test_run_args_bad_cmd_quoting() {
        let result = RunArgs::try_parse_from(["ttyd-run", "--cmd", "echo 'oops"]);
        assert_eq!(result.unwrap_err().kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_run_args_unknown_flag() {
        let result = RunArgs::try_parse_from(["ttyd-run", "--cmd", "ls", "--bogus"]);
        assert_eq!(result.unwrap_err().kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_run_args_missing_value() {
        let result = RunArgs::try_parse_from(["ttyd-run", "--cmd"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_common_args() {
        let args = RunArgs::parse_from([
            "ttyd-run",
            "--cmd",
            "hostname",
            "--cwd",
            "/srv",
            "--env",
            "A=1",
            "--env",
            "B",
            "--env",
            "A=2",
            "--ssh",
            "user@host",
            "--ssh",
            "-p",
            "--ssh",
            "2222",
        ]);
        let (invocation, _) = args.into_parts();

        assert_eq!(invocation.cwd, Some("/srv".to_string()));
        assert_eq!(invocation.env.len(), 2);
        assert_eq!(invocation.env.get("A"), Some(&"2".to_string()));
        assert_eq!(invocation.env.get("B"), Some(&String::new()));
        assert_eq!(
            invocation.ssh,
            Some(vec![
                "user@host".to_string(),
                "-p".to_string(),
                "2222".to_string()
            ])
        );
    }

    #[test]
    fn test_env_name_need_not_be_identifier() {
        let args = RunArgs::parse_from(["ttyd-run", "--cmd", "ls", "--env", "MY-VAR=1"]);
        let (invocation, _) = args.into_parts();
        assert_eq!(invocation.env.get("MY-VAR"), Some(&"1".to_string()));
    }

    #[test]
    fn test_empty_env_name_is_usage_error() {
        let result = RunArgs::try_parse_from(["ttyd-run", "--cmd", "ls", "--env", "=y"]);
        assert_eq!(result.unwrap_err().kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_run_args_argv_leading_dash() {
        let args = RunArgs::parse_from(["ttyd-run", "--argv", "-l"]);
        let (invocation, _) = args.into_parts();
        assert_eq!(invocation.payload, Payload::Command(vec!["-l".to_string()]));
    }

    #[test]
    fn test_shell_args_history_in_order() {
        let args = ShellArgs::parse_from([
            "ttyd-shell",
            "--history",
            "make",
            "--history",
            "--not-a-flag",
            "--history",
            "ls -la",
        ]);
        let (invocation, _) = args.into_parts();

        assert_eq!(
            invocation.payload,
            Payload::Shell {
                history: vec![
                    "make".to_string(),
                    "--not-a-flag".to_string(),
                    "ls -la".to_string()
                ]
            }
        );
    }

    #[test]
    fn test_shell_args_defaults() {
        let args = ShellArgs::parse_from(["ttyd-shell"]);
        let (invocation, launcher) = args.into_parts();

        assert_eq!(invocation.payload, Payload::Shell { history: vec![] });
        assert!(invocation.ssh.is_none());
        assert_eq!(launcher.settings(), LauncherSettings::default());
    }

    #[test]
    fn test_shell_args_rejects_cmd() {
        let result = ShellArgs::try_parse_from(["ttyd-shell", "--cmd", "ls"]);
        assert_eq!(result.unwrap_err().kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_launcher_args() {
        let args = ShellArgs::parse_from([
            "ttyd-shell",
            "--interpreter",
            "/usr/bin/python3.12",
            "--ssh-client",
            "/opt/ssh",
            "--remote-shell-layers",
            "2",
            "--dry-run",
        ]);
        let settings = args.launcher.settings();

        assert!(args.launcher.dry_run);
        assert_eq!(settings.interpreter, "/usr/bin/python3.12");
        assert_eq!(settings.ssh_client, "/opt/ssh");
        assert_eq!(settings.remote_quoting, RemoteQuoting::new(2));
    }
}
