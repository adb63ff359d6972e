mod commands;
mod domain;
mod services;
#[cfg(test)]
mod test_support;

use std::process::ExitCode;

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::command_error::CommandError;
use crate::commands::compute_cmd::compute_command;
use crate::commands::export_cmd::export_command;
use crate::commands::plot_capacity_cmd::plot_capacity_command;
use crate::commands::template_cmd::template_command;
use crate::commands::verify_cmd::verify_command;
use clap::{CommandFactory, Parser};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "command failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<(), CommandError> {
    match command {
        Commands::Compute {
            input,
            output,
            format,
            days,
        } => compute_command(&input, output.as_deref(), format, days),
        Commands::Export {
            input,
            output,
            days,
            exported_on,
        } => export_command(&input, &output, days, &exported_on),
        Commands::Verify { input } => verify_command(&input),
        Commands::PlotCapacity { input, output } => plot_capacity_command(&input, &output),
        Commands::Template { output } => template_command(&output),
        Commands::Completions { shell } => {
            let mut command = CliArgs::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
            Ok(())
        }
    }
}
