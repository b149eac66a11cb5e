//! REN Data Hub CSV exporter
//!
//! This application fetches monthly gas and electricity statistics from the
//! public REN Data Hub API, filters them to fixed category lists, pivots
//! them into one row per month, and writes one CSV file per dataset.
//!
//! # Pipeline
//!
//! The run is strictly sequential:
//! - **Fetch**: one GET per (dataset, year, month), months visited in order
//! - **Filter**: per-dataset category allow-list, everything else dropped
//! - **Pivot**: one row per (year, month), one column per category
//! - **Export**: one CSV per dataset with a fixed column order
//!
//! A month whose fetch fails is logged and skipped and the run carries on.
//! Gas is processed to completion before electricity starts.

mod collector;
mod config;
mod error;
mod export;
mod model;
mod ren;

#[cfg(test)]
mod test_utils;

use crate::config::{CollectorConfig, ExportConfig};
use crate::model::Dataset;

/// Application entry point.
///
/// Loads configuration from the environment, runs the gas export, then the
/// electricity export. Any error that reaches this level ends the run.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app_config = config::load_app_config()?;
    tracing_subscriber::fmt()
        .with_max_level(app_config.log_level())
        .init();

    let ren_config = config::load_ren_config()?;
    let collector_config = config::load_collector_config()?;
    let export_config = config::load_export_config()?;

    let client = ren::Client::new(ren_config);

    tracing::info!("Starting data collection...");
    run_dataset_export(&client, Dataset::Gas, &collector_config, &export_config).await?;
    run_dataset_export(
        &client,
        Dataset::Electricity,
        &collector_config,
        &export_config,
    )
    .await?;
    tracing::info!("Data collection finished.");

    Ok(())
}

/// Collects one dataset over the configured year range and writes its CSV
/// into the output directory.
async fn run_dataset_export(
    client: &ren::Client,
    dataset: Dataset,
    collector_config: &CollectorConfig,
    export_config: &ExportConfig,
) -> anyhow::Result<()> {
    tracing::info!("Collecting {} data...", dataset);
    let table = collector::collect_dataset(client, dataset, collector_config).await?;

    let filename = dataset.output_filename(collector_config.start_year, collector_config.end_year);
    let path = export_config.output_dir.join(&filename);
    export::write_csv(&table, &path)?;

    tracing::info!("{:?} data collected and saved to {}", dataset, filename);
    Ok(())
}
