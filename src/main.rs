//! toolhost - native tool launcher
//!
//! Exit status: the run's outcome code, or 2 when the host cannot start the tool.

use std::process::ExitCode;

use clap::Parser;
use miette::Diagnostic;
use tracing_subscriber::EnvFilter;

use toolhost::HOST_ERROR_EXIT_CODE;
use toolhost::cli::{Cli, Commands};
use toolhost::commands;
use toolhost::error::Result;

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<u8> = match cli.command {
        Commands::Run(args) => commands::run::run(&cli.host, args).map(|run| run.exit_code()),
        Commands::Exec(args) => commands::exec::run(&cli.host, args).map(|run| run.exit_code()),
        Commands::Tools => commands::tools::run(&cli.host).map(|()| 0),
        Commands::Version => commands::version::run().map(|()| 0),
        Commands::Completions(args) => commands::completions::run(args).map(|()| 0),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {e}");
            if let Some(help) = e.help() {
                eprintln!("  help: {help}");
            }
            ExitCode::from(HOST_ERROR_EXIT_CODE)
        }
    }
}
