//! pubchem-flashpoint binary entry point.
//!
//! Thin wrapper around the library that:
//! 1. Initializes logging (stderr, so stdout carries only the JSON)
//! 2. Parses and validates configuration
//! 3. Reads CAS numbers from stdin
//! 4. Runs the batch and prints the report to stdout

use anyhow::{Context, Result};
use pubchem_flashpoint::{
    BatchProcessor, LookupConfig, PubChemClient, PubChemLookup, read_cas_numbers, write_report,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = LookupConfig::from_args();
    config.validate()?;

    tracing::debug!(
        "Configuration loaded: base_url={}, timeout={:?}",
        config.base_url,
        config.request_timeout()
    );

    let cas_numbers = read_cas_numbers(std::io::stdin().lock())
        .context("failed to read CAS numbers from stdin")?;
    tracing::info!("Read {} CAS numbers", cas_numbers.len());

    let client = PubChemClient::new(&config)?;
    let processor = BatchProcessor::new(PubChemLookup::new(client));
    let report = processor.process(&cas_numbers).await;

    write_report(std::io::stdout().lock(), &report, config.output_style())
        .context("failed to write report to stdout")?;

    Ok(())
}
