//! `ttf generate` / `ttf regenerate`

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use ttf_config::ForgeConfig;
use ttf_core::{OutputFormat, TimetableRequest};
use ttf_engine::generate_timetable;
use ttf_oracle::FailoverOracle;

use crate::output;

pub async fn generate(
    request_path: &Path,
    constraints: Vec<String>,
    config_path: &Path,
    no_store: bool,
    format: OutputFormat,
) -> Result<()> {
    let content = std::fs::read_to_string(request_path)
        .with_context(|| format!("Failed to read request: {}", request_path.display()))?;
    let mut request: TimetableRequest = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse request: {}", request_path.display()))?;

    if !constraints.is_empty() {
        request
            .constraints
            .get_or_insert_with(Vec::new)
            .extend(constraints);
    }

    run(&request, config_path, no_store, format).await
}

pub async fn regenerate(
    id: &str,
    constraints: Vec<String>,
    config_path: &Path,
    no_store: bool,
    format: OutputFormat,
) -> Result<()> {
    let stored = ttf_store::load_timetable(id)?;
    info!(id = %stored.timetable_id, "regenerating from stored timetable");
    let request = stored.to_request(constraints);
    run(&request, config_path, no_store, format).await
}

async fn run(
    request: &TimetableRequest,
    config_path: &Path,
    no_store: bool,
    format: OutputFormat,
) -> Result<()> {
    let config = ForgeConfig::load(config_path)?;
    let oracle = FailoverOracle::from_config(&config.oracle)?;

    let timetable = generate_timetable(&oracle, request, config.generation).await?;

    if no_store {
        info!(id = %timetable.timetable_id, "skipping store (--no-store)");
    } else {
        ttf_store::save_timetable(&timetable)?;
    }

    output::print_timetable(&timetable, format)
}
