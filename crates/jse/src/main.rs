//! jse - CLI tool for JSON schema estimation
//!
//! Reads a JSON document collection from a file and prints its estimated
//! aggregate schema.

use std::path::PathBuf;

use clap::Parser;

mod commands;
mod error;
mod loader;

use commands::estimate::EstimateArgs;

/// Estimate the aggregate shape of a JSON document collection
#[derive(Parser)]
#[command(name = "jse", version, about)]
struct Cli {
    /// Path to a JSON file holding the document collection
    file: PathBuf,

    /// Output format (ideal, stats, yaml)
    #[arg(long, default_value = "ideal")]
    format: String,

    /// Write output to a file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Maximum number of documents to ingest (0 = all)
    #[arg(long, default_value_t = 0)]
    sample_size: usize,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let args = EstimateArgs {
        file: cli.file,
        format: cli.format,
        output: cli.output,
        sample_size: cli.sample_size,
    };

    if let Err(e) = commands::estimate::handle_estimate(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
