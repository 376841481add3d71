use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod analyze_cmd;
mod chart;
mod cli;
mod error;
mod output;
mod shared;
mod table_cmd;

use analyze_cmd::run_analyze;
use cli::{Cli, Commands};
use error::CliResult;
use output::OutputFormat;
use table_cmd::{run_letters, run_words};

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands, output_format: OutputFormat) -> CliResult<()> {
    match command {
        Commands::Letters(args) => run_letters(args, output_format),
        Commands::Words(args) => run_words(args, output_format),
        Commands::Analyze(args) => run_analyze(args, output_format),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    debug!("Parsed CLI args: {:?}", cli);

    let output_format = cli.output_format;
    match run(cli.command, output_format) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => err.report(output_format),
    }
}
