//! Timetable CRUD over one JSON file per timetable.
//!
//! Files live in `{data_dir}/timetables/{ULID}.json`. ULIDs sort
//! lexicographically by creation time, so "latest" is simply the maximum
//! file stem.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use ttf_core::{validate_timetable_id, EngineError, Timetable};

/// Get the timetable store directory (`{data_dir}/ttf/timetables`)
pub fn store_root() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("", "", "ttf")
        .context("Failed to determine project directories")?;
    Ok(proj_dirs.data_dir().join("timetables"))
}

fn timetable_path_in(base_dir: &Path, id: &str) -> PathBuf {
    base_dir.join(format!("{id}.json"))
}

/// Persist a finished timetable under its own ID.
pub fn save_timetable(timetable: &Timetable) -> Result<PathBuf> {
    save_timetable_in(&store_root()?, timetable)
}

pub fn save_timetable_in(base_dir: &Path, timetable: &Timetable) -> Result<PathBuf> {
    validate_timetable_id(&timetable.timetable_id)?;
    fs::create_dir_all(base_dir)
        .with_context(|| format!("Failed to create store directory: {}", base_dir.display()))?;
    let path = timetable_path_in(base_dir, &timetable.timetable_id);
    let json = serde_json::to_string_pretty(timetable).context("Failed to serialize timetable")?;
    fs::write(&path, json)
        .with_context(|| format!("Failed to write timetable: {}", path.display()))?;
    info!(id = %timetable.timetable_id, path = %path.display(), "timetable stored");
    Ok(path)
}

/// Load a timetable by full ID or unique prefix.
pub fn load_timetable(query: &str) -> Result<Timetable> {
    load_timetable_in(&store_root()?, query)
}

pub fn load_timetable_in(base_dir: &Path, query: &str) -> Result<Timetable> {
    let id = resolve_id_in(base_dir, query)?;
    read_timetable(&timetable_path_in(base_dir, &id))
}

/// Load the most recently stored timetable.
pub fn load_latest() -> Result<Timetable> {
    load_latest_in(&store_root()?)
}

pub fn load_latest_in(base_dir: &Path) -> Result<Timetable> {
    let latest = stored_ids_in(base_dir)?
        .into_iter()
        .max()
        .ok_or_else(|| EngineError::TimetableNotFound("latest".to_string()))?;
    read_timetable(&timetable_path_in(base_dir, &latest))
}

/// Delete a stored timetable by full ID or unique prefix.
pub fn delete_timetable(query: &str) -> Result<String> {
    delete_timetable_in(&store_root()?, query)
}

pub fn delete_timetable_in(base_dir: &Path, query: &str) -> Result<String> {
    let id = resolve_id_in(base_dir, query)?;
    let path = timetable_path_in(base_dir, &id);
    fs::remove_file(&path)
        .with_context(|| format!("Failed to delete timetable: {}", path.display()))?;
    info!(id = %id, "timetable deleted");
    Ok(id)
}

/// One line of `ttf list` output.
#[derive(Debug, Clone, Serialize)]
pub struct TimetableSummary {
    pub timetable_id: String,
    pub institution: String,
    pub department: String,
    pub semester: i32,
    pub academic_year: String,
    pub divisions: usize,
    pub slots: usize,
}

/// List stored timetables, newest first.
pub fn list_timetables() -> Result<Vec<TimetableSummary>> {
    list_timetables_in(&store_root()?)
}

pub fn list_timetables_in(base_dir: &Path) -> Result<Vec<TimetableSummary>> {
    let mut ids = stored_ids_in(base_dir)?;
    ids.sort();
    ids.reverse();

    let mut summaries = Vec::with_capacity(ids.len());
    for id in ids {
        let timetable = read_timetable(&timetable_path_in(base_dir, &id))?;
        summaries.push(TimetableSummary {
            timetable_id: timetable.timetable_id,
            institution: timetable.metadata.institution_name,
            department: timetable.metadata.department,
            semester: timetable.metadata.semester,
            academic_year: timetable.metadata.academic_year,
            divisions: timetable.divisions.len(),
            slots: timetable.slots.len(),
        });
    }
    Ok(summaries)
}

/// Aggregates over the whole store.
#[derive(Debug, Clone, Serialize)]
pub struct StoreStats {
    pub total_timetables: usize,
    pub total_slots: usize,
    pub active_lecturers: usize,
}

pub fn store_stats() -> Result<StoreStats> {
    store_stats_in(&store_root()?)
}

pub fn store_stats_in(base_dir: &Path) -> Result<StoreStats> {
    let mut total_timetables = 0;
    let mut total_slots = 0;
    let mut lecturers = std::collections::HashSet::new();
    for id in stored_ids_in(base_dir)? {
        let timetable = read_timetable(&timetable_path_in(base_dir, &id))?;
        total_timetables += 1;
        total_slots += timetable.slots.len();
        for slot in &timetable.slots {
            lecturers.insert(slot.lecturer.clone());
        }
    }
    Ok(StoreStats {
        total_timetables,
        total_slots,
        active_lecturers: lecturers.len(),
    })
}

/// Resolve a full ID, unique prefix, or the literal `latest`.
fn resolve_id_in(base_dir: &Path, query: &str) -> Result<String> {
    if query == "latest" {
        return stored_ids_in(base_dir)?
            .into_iter()
            .max()
            .ok_or_else(|| EngineError::TimetableNotFound("latest".to_string()).into());
    }

    if query.len() == 26 {
        validate_timetable_id(query)?;
        let path = timetable_path_in(base_dir, query);
        if !path.exists() {
            return Err(EngineError::TimetableNotFound(query.to_string()).into());
        }
        return Ok(query.to_string());
    }

    let mut matches: Vec<String> = stored_ids_in(base_dir)?
        .into_iter()
        .filter(|id| id.starts_with(query))
        .collect();
    match matches.len() {
        0 => Err(EngineError::TimetableNotFound(query.to_string()).into()),
        1 => Ok(matches.remove(0)),
        _ => Err(EngineError::AmbiguousTimetablePrefix(query.to_string()).into()),
    }
}

fn stored_ids_in(base_dir: &Path) -> Result<Vec<String>> {
    if !base_dir.exists() {
        return Ok(Vec::new());
    }
    let entries = fs::read_dir(base_dir)
        .with_context(|| format!("Failed to read store directory: {}", base_dir.display()))?;
    let mut ids = Vec::new();
    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if let Some(stem) = name.strip_suffix(".json") {
            if validate_timetable_id(stem).is_ok() {
                ids.push(stem.to_string());
            }
        }
    }
    Ok(ids)
}

fn read_timetable(path: &Path) -> Result<Timetable> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read timetable: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse timetable: {}", path.display()))
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
