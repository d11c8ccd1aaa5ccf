//! `ttf show` / `list` / `delete` / `validate` / `stats`

use std::path::Path;

use anyhow::{Context, Result};
use ttf_core::{OutputFormat, Timetable};
use ttf_engine::validate_schedule;

use crate::output;

pub fn show(id: &str, format: OutputFormat) -> Result<()> {
    let timetable = ttf_store::load_timetable(id)?;
    output::print_timetable(&timetable, format)
}

pub fn list(format: OutputFormat) -> Result<()> {
    let summaries = ttf_store::list_timetables()?;
    output::print_summaries(&summaries, format)
}

pub fn delete(id: &str, format: OutputFormat) -> Result<()> {
    let deleted = ttf_store::delete_timetable(id)?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::json!({ "deleted": deleted })),
        OutputFormat::Text => println!("Deleted timetable {deleted}"),
    }
    Ok(())
}

/// Re-check a timetable file against the request data it carries. Exits
/// non-zero when violations are found.
pub fn validate(file: &Path, format: OutputFormat) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read timetable: {}", file.display()))?;
    let timetable: Timetable = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse timetable: {}", file.display()))?;

    let request = timetable.to_request(Vec::new());
    let report = validate_schedule(&timetable.slots, &request, None);
    output::print_report(&report, format)?;
    if !report.valid {
        std::process::exit(1);
    }
    Ok(())
}

pub fn stats(format: OutputFormat) -> Result<()> {
    let stats = ttf_store::store_stats()?;
    output::print_stats(&stats, format)
}
