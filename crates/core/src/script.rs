//! Generation of the small Python programs that carry out an invocation.
//!
//! Each script is a fixed driver (see `src/drivers/`) preceded by one line that
//! binds `config` to the invocation's data. The data is serialized to JSON and
//! embedded as a single [`string_literal`], so no value is ever spliced into
//! code. The drivers pass on every inherited variable whatever its name, and
//! argv[0] is always a program name.

use log::debug;
use serde::Serialize;

use crate::config::DEFAULT_SHELL;
use crate::environment::Environment;
use crate::error::{Error, Result};
use crate::quoting::string_literal;

/// Name of the seeded history file inside the temporary directory.
pub const HISTORY_FILE_NAME: &str = "history";

const RUN_DRIVER: &str = include_str!("drivers/run.py");
const SHELL_DRIVER: &str = include_str!("drivers/shell.py");

#[derive(Serialize)]
struct RunConfig<'a> {
    argv: Vec<&'a str>,
    cwd: Option<&'a str>,
    env: &'a Environment,
}

#[derive(Serialize)]
struct ShellConfig<'a> {
    history: String,
    history_file_name: &'a str,
    default_shell: &'a str,
    cwd: Option<&'a str>,
    env: &'a Environment,
}

fn with_config<T: Serialize>(config: &T, driver: &str) -> Result<String> {
    let literal = string_literal(&serde_json::to_string(config)?)?;
    Ok(format!("import json\nconfig = json.loads({literal})\n{driver}"))
}

/// Returns the history file content for `history`: each line followed by a newline.
pub fn history_text<S: AsRef<str>>(history: &[S]) -> String {
    history
        .iter()
        .map(|line| format!("{}\n", line.as_ref()))
        .collect()
}

/// Generates a script which runs `argv` and exits with its exit code.
///
/// The script changes into `cwd` when given (a leading `~` is resolved against
/// `$HOME` of the host running it, and a failure exits 1), layers `env` over
/// the environment it inherited and then replaces itself with the command, so
/// the command inherits the standard streams and its exit status becomes the
/// script's. A command that cannot be started exits 127.
///
/// # Errors
///
/// Returns an error if `argv` is empty.
///
/// # Examples
///
/// ```
/// use ttyd_launch_core::environment::Environment;
/// use ttyd_launch_core::script::generate_run_script;
///
/// let argv = vec!["echo".to_string(), "hello world".to_string()];
/// let script = generate_run_script(&argv, None, &Environment::new()).unwrap();
/// assert!(script.starts_with("import json\n"));
/// ```
pub fn generate_run_script<S: AsRef<str>>(
    argv: &[S],
    cwd: Option<&str>,
    env: &Environment,
) -> Result<String> {
    if argv.is_empty() {
        return Err(Error::EmptyCommand);
    }

    let config = RunConfig {
        argv: argv.iter().map(|arg| arg.as_ref()).collect(),
        cwd,
        env,
    };
    let script = with_config(&config, RUN_DRIVER)?;
    debug!("Generated run script:\n{script}");
    Ok(script)
}

/// Generates a script which starts an interactive shell with seeded history.
///
/// The script creates a temporary directory, writes `history` into a file
/// inside it and starts `$SHELL` (or `bash` when unset or empty, after `env`
/// is applied) with `HISTFILE` pointing at that file. It exits with the
/// shell's exit code and removes the directory on every exit path, including
/// `HUP` and `TERM`. `INT` and `QUIT` are left to the interactive shell.
///
/// # Errors
///
/// Returns an error if the invocation data cannot be encoded.
pub fn generate_shell_script<S: AsRef<str>>(
    history: &[S],
    cwd: Option<&str>,
    env: &Environment,
) -> Result<String> {
    let config = ShellConfig {
        history: history_text(history),
        history_file_name: HISTORY_FILE_NAME,
        default_shell: DEFAULT_SHELL,
        cwd,
        env,
    };
    let script = with_config(&config, SHELL_DRIVER)?;
    debug!("Generated shell script:\n{script}");
    Ok(script)
}
