use std::process::ExitCode;

use clap::Parser;
use ttyd_launch_cli::cli_args::RunArgs;
use ttyd_launch_cli::launcher;

fn main() -> ExitCode {
    env_logger::init();

    let (invocation, launcher_args) = RunArgs::parse().into_parts();
    launcher::exit_code(launcher::launch(&invocation, &launcher_args))
}
