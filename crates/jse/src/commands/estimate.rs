//! CLI command for schema estimation

use std::path::PathBuf;

use schema_estimate_core::estimation::{EstimateConfig, SchemaEstimator};

use crate::error::CliError;
use crate::loader;

/// Arguments for the estimate command
pub struct EstimateArgs {
    /// Path to the JSON document collection
    pub file: PathBuf,
    /// Output format (ideal, stats, yaml)
    pub format: String,
    /// Output file path (stdout if not provided)
    pub output: Option<PathBuf>,
    /// Maximum number of documents to ingest (0 = all)
    pub sample_size: usize,
}

/// Handle the estimate command
pub fn handle_estimate(args: &EstimateArgs) -> Result<(), CliError> {
    eprintln!("Reading {}", args.file.display());

    let documents = loader::read_documents(&args.file)?;
    eprintln!("  Documents loaded: {}", documents.len());

    if documents.is_empty() {
        eprintln!("Warning: empty document collection");
    }

    let config = EstimateConfig::builder()
        .sample_size(args.sample_size)
        .build();

    let mut estimator = SchemaEstimator::with_config(config);
    for document in documents {
        estimator.add_value(document);
    }

    let stats = estimator.stats();
    let estimate = estimator.finalize();

    eprintln!();
    eprintln!("Estimation complete:");
    eprintln!("  Documents processed: {}", stats.documents_processed);
    eprintln!("  Paths discovered: {}", stats.paths_discovered);

    // Format output
    let output_str = match args.format.as_str() {
        "stats" => estimate.to_json_pretty(),
        "yaml" => {
            serde_yaml::to_string(&estimate).map_err(|e| CliError::Serialize(e.to_string()))?
        }
        "ideal" | _ => serde_json::to_string_pretty(&estimate.to_ideal_object())
            .map_err(|e| CliError::Serialize(e.to_string()))?,
    };

    // Write output
    if let Some(ref output_path) = args.output {
        std::fs::write(output_path, &output_str).map_err(|source| CliError::Io {
            path: output_path.display().to_string(),
            source,
        })?;
        eprintln!();
        eprintln!("Estimate written to: {}", output_path.display());
    } else {
        println!("{output_str}");
    }

    Ok(())
}
