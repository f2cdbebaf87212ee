//! Command-line flags

use clap::Parser;
use unitconv_units::ConverterConfig;
use crate::ShellOptions;

#[derive(Debug, Parser)]
#[command(
    name = "unitconv",
    about = "Convert temperatures and distances with exact decimal arithmetic",
    long_about = "Interactive converter for C/F/K and KM/L/MI. Prints the session history on exit."
)]
pub struct Cli {
    /// Working precision in significant digits (overrides UNITCONV_PRECISION)
    #[arg(long)]
    pub precision: Option<usize>,

    /// Fraction digits in results (overrides UNITCONV_DECIMAL_PLACES)
    #[arg(long)]
    pub places: Option<u32>,

    /// Do not reset the terminal before prompts
    #[arg(long)]
    pub no_clear: bool,

    /// Print the history as JSON on exit
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// Apply flag overrides on top of `base`
    pub fn config(&self, base: ConverterConfig) -> ConverterConfig {
        let mut config = base;
        if let Some(precision) = self.precision {
            config = config.with_precision(precision);
        }
        if let Some(places) = self.places {
            config = config.with_decimal_places(places);
        }
        config
    }

    pub fn shell_options(&self) -> ShellOptions {
        ShellOptions {
            clear_screen: !self.no_clear,
            json_history: self.json,
        }
    }

    /// Default log filter when RUST_LOG is unset
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}
