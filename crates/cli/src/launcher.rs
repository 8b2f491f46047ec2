//! Shared driver for the `ttyd-run` and `ttyd-shell` binaries.

use std::io::{stdout, Write};
use std::process::ExitCode;

use log::debug;
use ttyd_launch_core::config::LAUNCH_FAILURE_EXIT_CODE;
use ttyd_launch_core::error::Result;
use ttyd_launch_core::execution;
use ttyd_launch_core::invocation::Invocation;

use crate::cli_args::LauncherArgs;

/// Plans `invocation` and either prints the plan (dry run) or executes it.
///
/// Returns the exit code this process should finish with.
///
/// # Errors
///
/// Returns an error if the script cannot be generated, the dry-run output
/// cannot be written, or the interpreter or SSH client cannot be started.
pub fn launch(invocation: &Invocation, launcher: &LauncherArgs) -> Result<u8> {
    debug!("Invocation: {invocation:?}");
    let plan = invocation.plan(&launcher.settings())?;

    if launcher.dry_run {
        let mut stdout = stdout();
        stdout.write_all(plan.to_yaml()?.as_bytes())?;
        stdout.flush()?;
        return Ok(0);
    }

    execution::execute_plan(&plan)
}

/// Converts the outcome of [`launch`] into the process exit code.
///
/// Errors are printed to stderr and reported as [`LAUNCH_FAILURE_EXIT_CODE`].
pub fn exit_code(result: Result<u8>) -> ExitCode {
    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            debug!("Launch failed: {e:?}");
            eprintln!("{e}");
            ExitCode::from(LAUNCH_FAILURE_EXIT_CODE)
        }
    }
}
