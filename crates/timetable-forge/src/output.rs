//! Rendering for CLI results.

use anyhow::Result;
use ttf_core::{OutputFormat, Timetable};
use ttf_engine::ValidationReport;
use ttf_store::{StoreStats, TimetableSummary};

pub fn print_timetable(timetable: &Timetable, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(timetable)?);
        }
        OutputFormat::Text => {
            println!(
                "Timetable {}: {} / {} (semester {}, {})",
                timetable.timetable_id,
                timetable.metadata.institution_name,
                timetable.metadata.department,
                timetable.metadata.semester,
                timetable.metadata.academic_year,
            );
            for division in &timetable.divisions {
                println!("\nDivision {}:", division.name);
                let mut slots: Vec<_> = timetable
                    .slots
                    .iter()
                    .filter(|s| s.division == division.name)
                    .collect();
                slots.sort_by_key(|s| {
                    let day_index = timetable
                        .metadata
                        .working_days
                        .iter()
                        .position(|d| d == &s.day)
                        .unwrap_or(usize::MAX);
                    (day_index, s.period)
                });
                for slot in slots {
                    println!(
                        "  {:<10} P{}  {:<10} {:<8} {:<8} {}",
                        slot.day, slot.period, slot.subject, slot.lecturer, slot.room, slot.kind
                    );
                }
            }
        }
    }
    Ok(())
}

pub fn print_summaries(summaries: &[TimetableSummary], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(summaries)?);
        }
        OutputFormat::Text => {
            if summaries.is_empty() {
                println!("No timetables stored.");
                return Ok(());
            }
            for summary in summaries {
                println!(
                    "{}  {} / {}  sem {}  {}  ({} divisions, {} slots)",
                    summary.timetable_id,
                    summary.institution,
                    summary.department,
                    summary.semester,
                    summary.academic_year,
                    summary.divisions,
                    summary.slots,
                );
            }
        }
    }
    Ok(())
}

pub fn print_report(report: &ValidationReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        OutputFormat::Text => {
            if report.valid {
                println!("Schedule is valid.");
            } else {
                println!("Schedule is INVALID ({} violations):", report.violations.len());
                for violation in &report.violations {
                    println!("  - {violation}");
                }
            }
        }
    }
    Ok(())
}

pub fn print_stats(stats: &StoreStats, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(stats)?);
        }
        OutputFormat::Text => {
            println!("Timetables: {}", stats.total_timetables);
            println!("Scheduled classes: {}", stats.total_slots);
            println!("Active lecturers: {}", stats.active_lecturers);
        }
    }
    Ok(())
}
