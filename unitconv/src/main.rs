//! Unitconv - interactive temperature and distance converter
//!
//! Usage:
//! ```bash
//! unitconv                 # prompt, convert, repeat; history on exit
//! unitconv --no-clear      # keep scrollback
//! unitconv --json          # history as JSON
//! RUST_LOG=debug unitconv  # log each conversion to stderr
//! ```

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use unitconv::{Cli, Shell};
use unitconv_units::{Converter, ConverterConfig};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new(cli.log_level())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()))
    };
    // Logs go to stderr so they never interleave with prompts
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = cli.config(ConverterConfig::from_env());
    let converter = match Converter::standard(config) {
        Ok(converter) => converter,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };
    tracing::info!(precision = config.precision, places = config.decimal_places, "session started");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let shell = Shell::new(converter, stdin.lock(), stdout.lock(), cli.shell_options());

    match shell.run() {
        Ok(converter) => {
            tracing::info!(conversions = converter.history_len(), "session ended");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("I/O error: {}", e);
            ExitCode::FAILURE
        }
    }
}
