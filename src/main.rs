//! fxconv - convert between currencies from the terminal
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use currency_converter::{load_config, run_headless, run_tui, Overrides};
use fxconv_core::prelude::*;
use fxconv_core::{logging, CurrencyCode};

/// fxconv - convert between currencies from the terminal
#[derive(Parser, Debug)]
#[command(name = "fxconv")]
#[command(about = "Convert between currencies with short-lived quotes", long_about = None)]
struct Args {
    /// Currency to convert from, e.g. GBP
    #[arg(long, value_name = "CODE")]
    from: Option<CurrencyCode>,

    /// Currency to convert to, e.g. USD
    #[arg(long, value_name = "CODE")]
    to: Option<CurrencyCode>,

    /// Starting amount
    #[arg(long, allow_hyphen_values = true)]
    amount: Option<String>,

    /// Config file to read instead of the default location
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Run in headless mode (commands on stdin, NDJSON on stdout)
    #[arg(long)]
    headless: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the front end owns stdout)
    logging::init()?;

    let mut settings = load_config(args.config.as_deref());
    Overrides {
        source: args.from,
        target: args.to,
        amount: args.amount,
    }
    .apply(&mut settings);

    let result = if args.headless {
        run_headless(settings).await
    } else {
        run_tui(settings).await
    };

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
        eprintln!("Logs: {}", logging::log_directory().display());
    }

    info!("Currency converter exiting");
    result
}
