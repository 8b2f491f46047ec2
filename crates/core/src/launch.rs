//! Planning how a generated script is run.
//!
//! A [`LaunchPlan`] is the exact program and argument list that will be
//! started. Building one does no I/O, which keeps local/remote decisions and
//! quoting testable without spawning anything.

use std::fmt::{Display, Formatter};
use std::process::Command;

use serde::Serialize;

use crate::config::LauncherSettings;
use crate::error::Result;

/// A program and its arguments, ready to be started.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchPlan {
    pub program: String,
    pub args: Vec<String>,
}

impl LaunchPlan {
    /// Plans how `script` is run, on the host named by `ssh_args` or locally without them.
    ///
    /// Locally this is `<interpreter> -c <script>`. Remotely it is
    /// `<ssh client> <ssh args...> <remote interpreter> -c <quoted script>`,
    /// where the script is quoted for the remote shell(s) as configured in
    /// `settings.remote_quoting`.
    ///
    /// # Errors
    ///
    /// Returns an error if the script cannot be quoted for the remote shell.
    pub fn new(
        script: &str,
        ssh_args: Option<&[String]>,
        settings: &LauncherSettings,
    ) -> Result<Self> {
        match ssh_args {
            None | Some([]) => Ok(Self {
                program: settings.interpreter.clone(),
                args: vec!["-c".to_string(), script.to_string()],
            }),
            Some(ssh_args) => {
                let mut args = ssh_args.to_vec();
                args.push(settings.remote_interpreter.clone());
                args.push("-c".to_string());
                args.push(settings.remote_quoting.apply(script)?);
                Ok(Self {
                    program: settings.ssh_client.clone(),
                    args,
                })
            }
        }
    }

    /// Builds the [`Command`] for this plan. Standard streams are left to the caller.
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }

    /// Renders the plan as YAML for dry runs.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

impl Display for LaunchPlan {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let words =
            std::iter::once(self.program.as_str()).chain(self.args.iter().map(String::as_str));
        match shlex::try_join(words) {
            Ok(line) => f.write_str(&line),
            Err(_) => write!(f, "{} {:?}", self.program, self.args),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quoting::RemoteQuoting;

    fn ssh(args: &[&str]) -> Vec<String> {
        args.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_empty_ssh_args_run_locally() {
        let plan = LaunchPlan::new("pass", Some(&[][..]), &LauncherSettings::default()).unwrap();
        assert_eq!(plan.program, "python3");
    }

    #[test]
    fn test_local_plan() {
        let plan = LaunchPlan::new("pass", None, &LauncherSettings::default()).unwrap();
        assert_eq!(plan.program, "python3");
        assert_eq!(plan.args, vec!["-c", "pass"]);
    }

    #[test]
    fn test_local_plan_does_not_quote_script() {
        let script = "print('it\\'s', \"$HOME\")";
        let plan = LaunchPlan::new(script, None, &LauncherSettings::default()).unwrap();
        assert_eq!(plan.args[1], script);
    }

    #[test]
    fn test_remote_plan_keeps_ssh_args_in_order() {
        let ssh_args = ssh(&["user@host", "-p", "2222"]);
        let plan =
            LaunchPlan::new("pass", Some(ssh_args.as_slice()), &LauncherSettings::default()).unwrap();

        assert_eq!(plan.program, "ssh");
        assert_eq!(&plan.args[..3], &["user@host", "-p", "2222"]);
        assert_eq!(&plan.args[3..5], &["python3", "-c"]);
        assert_eq!(plan.args.len(), 6);
    }

    #[test]
    fn test_remote_plan_quotes_script_once() {
        let script = "print('a b')";
        let plan =
            LaunchPlan::new(script, Some(ssh(&["host"]).as_slice()), &LauncherSettings::default()).unwrap();
        let quoted = plan.args.last().unwrap();

        assert_ne!(quoted, script);
        assert_eq!(shlex::split(quoted).unwrap(), vec![script]);
    }

    #[test]
    fn test_remote_plan_respects_quoting_layers() {
        let settings = LauncherSettings {
            remote_quoting: RemoteQuoting::new(2),
            ..LauncherSettings::default()
        };
        let script = "print('x y')";
        let plan = LaunchPlan::new(script, Some(ssh(&["jump"]).as_slice()), &settings).unwrap();

        let once = shlex::split(plan.args.last().unwrap()).unwrap().remove(0);
        let twice = shlex::split(&once).unwrap().remove(0);
        assert_eq!(twice, script);
    }

    #[test]
    fn test_custom_programs() {
        let settings = LauncherSettings {
            interpreter: "/usr/bin/python3.12".to_string(),
            ssh_client: "/opt/ssh".to_string(),
            ..LauncherSettings::default()
        };
        let local = LaunchPlan::new("pass", None, &settings).unwrap();
        assert_eq!(local.program, "/usr/bin/python3.12");

        let remote = LaunchPlan::new("pass", Some(ssh(&["h"]).as_slice()), &settings).unwrap();
        assert_eq!(remote.program, "/opt/ssh");
        assert_eq!(remote.args[1], "python3");
    }

    #[test]
    fn test_display_is_shell_quoted() {
        let plan = LaunchPlan {
            program: "python3".to_string(),
            args: vec!["-c".to_string(), "print(1)".to_string()],
        };
        assert_eq!(plan.to_string(), "python3 -c 'print(1)'");
    }

    #[test]
    fn test_to_yaml() {
        let plan = LaunchPlan {
            program: "ssh".to_string(),
            args: vec!["host".to_string()],
        };
        let yaml = plan.to_yaml().unwrap();
        assert!(yaml.contains("program: ssh"));
        assert!(yaml.contains("- host"));
    }
}
