//! Turnclock entry point.

use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use turnclock_tui::Runtime;

/// Turn timer and phase tracker for tabletop games
#[derive(Parser, Debug)]
#[command(name = "turnclock")]
#[command(about = "Turn timer and phase tracker for tabletop games")]
#[command(version)]
struct Args {
    /// Path to the options file (created on first run)
    #[arg(short, long, default_value = "turnclock.json")]
    options: String,

    /// Write diagnostics to this file
    ///
    /// The terminal is the game screen, so logging stays off unless a file
    /// is given.
    #[arg(long)]
    log_file: Option<String>,

    /// Log level filter when `--log-file` is set (overridden by RUST_LOG)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let file = std::fs::File::create(path)?;
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
            .with(filter)
            .init();
    }

    let runtime = Runtime::create(args.options.into())?;
    Ok(runtime.run().await?)
}
