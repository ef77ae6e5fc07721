//! nthbuyer CLI - Wait-time estimator for "be the Nth buyer" promotions.

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod display;
mod input;

#[derive(Parser)]
#[command(name = "nthbuyer")]
#[command(about = "Estimate the wait for the next Nth-buyer promotion winner", long_about = None)]
#[command(version)]
#[command(group(ArgGroup::new("input").required(true).args(["input_json", "input_file"])))]
struct Cli {
    /// Request as an inline JSON object
    #[arg(long, value_name = "JSON")]
    input_json: Option<String>,

    /// Path to a JSON request file ("-" reads stdin)
    #[arg(long, value_name = "PATH")]
    input_file: Option<PathBuf>,

    /// Pretty-print the JSON result
    #[arg(long)]
    pretty: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (only log errors)
    #[arg(short, long, global = true)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let text = input::RequestSource::from_args(cli.input_json, cli.input_file)?.read()?;

    let result = nthbuyer_lib::estimate_json(&text).context("Failed to estimate wait")?;
    display::print_result(&result, cli.pretty)
}

/// Installs the stderr subscriber. `RUST_LOG` takes precedence over the flags.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
