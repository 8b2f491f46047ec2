use std::process::ExitCode;

use clap::Parser;
use ttyd_launch_cli::cli_args::ShellArgs;
use ttyd_launch_cli::launcher;

fn main() -> ExitCode {
    env_logger::init();

    let (invocation, launcher_args) = ShellArgs::parse().into_parts();
    launcher::exit_code(launcher::launch(&invocation, &launcher_args))
}
