//! Generates the synthetic aid dataset and writes it as JSON.
//!
//! Run with:
//! ```
//! cargo run -p aid-data --bin generate
//! ```
//!
//! Optional environment: `AID_DATA_OUTPUT_DIR` (default `src/data`),
//! `AID_DATA_TOTAL_PROJECTS` (default 180), `AID_DATA_SEED`.

use aid_data::builders::DatasetBuilder;
use aid_data::config::GenConfig;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = GenConfig::from_env()?;

    tracing::info!("Generating synthetic data...");
    if let Some(seed) = config.seed {
        tracing::info!("Using seed {}", seed);
    }

    let builder = DatasetBuilder::from_config(config);
    tracing::debug!("Config: {}", serde_json::to_string(builder.config())?);
    let output_dir = builder.config().output_dir.clone();

    let dataset = builder.build()?;
    let summary = dataset.summary();

    tracing::info!("Done! Wrote to {}", output_dir.display());
    tracing::info!("  Countries: {}", summary.country_count);
    tracing::info!("  Regions: {}", summary.region_count);
    tracing::info!("  Organizations: {}", summary.org_count);
    tracing::info!("  Aid edges: {}", summary.edge_count);
    tracing::info!("  Projects: {}", summary.total_projects);
    for (aid_type, projects) in &summary.projects_by_aid_type {
        tracing::info!("    {}: {}", aid_type, projects);
    }
    tracing::debug!("Summary: {}", serde_json::to_string(&summary)?);

    Ok(())
}
