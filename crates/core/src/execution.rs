use std::process::{ExitStatus, Stdio};

use log::{debug, info};

use crate::error::{Error, Result};
use crate::launch::LaunchPlan;

/// Runs `plan` with inherited standard streams and waits for it.
///
/// Returns the child's exit code as reported by [`exit_code`].
///
/// # Errors
///
/// Returns [`Error::Spawn`] if the program cannot be started and
/// [`Error::Wait`] if waiting for it fails. A child that runs and exits
/// non-zero is not an error.
pub fn execute_plan(plan: &LaunchPlan) -> Result<u8> {
    info!("Executing: {plan}");

    let mut command = plan.to_command();
    command
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    let status = command
        .spawn()
        .map_err(|e| Error::spawn_error(&plan.program, e))?
        .wait()
        .map_err(|e| Error::wait_error(&plan.program, e))?;

    debug!("`{}` finished with {status}", plan.program);
    Ok(exit_code(status))
}

/// Maps a child's exit status onto the code this process should exit with.
///
/// Normal exits keep their code. A child killed by signal `N` maps to
/// `128 + N`, as a shell reports it.
pub fn exit_code(status: ExitStatus) -> u8 {
    if let Some(code) = status.code() {
        return truncate(code);
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return truncate(128 + signal);
        }
    }

    1
}

fn truncate(code: i32) -> u8 {
    u8::try_from(code.rem_euclid(256)).unwrap_or(u8::MAX)
}
