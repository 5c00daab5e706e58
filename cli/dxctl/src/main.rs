//! dxctl (dx) - CLI for the dx resource naming convention
//!
//! Generates resource names from a configured prefix and exposes the
//! configured prefix to scripts.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

use commands::Cli;

fn main() {
    let cli = Cli::parse();

    // Prefer RUST_LOG, fall back to --log-level / DX_LOG
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| cli.log_level().into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = cli.run() {
        error::print_error(&e);
        std::process::exit(1);
    }
}
