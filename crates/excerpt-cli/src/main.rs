use std::process::ExitCode;

use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod output;

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("excerpt error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<bool> {
    let cli = cli::Cli::parse();
    bootstrap::init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    let sources = bootstrap::load_sources(&flags)?;
    commands::dispatch(&cli.command, &sources, &flags)
}
