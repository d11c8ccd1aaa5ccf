//! Exhaustive, stateless schedule validator.
//!
//! Re-derives every global invariant over the entire merged schedule and
//! returns a structured violation list whose rendered text is fed back into
//! the next generation spec.

use std::collections::HashMap;

use serde::Serialize;
use ttf_core::{Slot, TimetableRequest};

/// Hard cap on same-subject non-Lab periods per day per division.
///
/// The source of truth for both the validator and the optimizer. Kept as a
/// constant for now; promote to `GenerationConfig` if institutions ever need
/// a different cap.
pub const MAX_DAILY_SUBJECT_PERIODS: u32 = 2;

/// One invariant violation, with enough context to feed back verbatim into
/// the next generation attempt.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Violation {
    #[error("Lecturer {lecturer} double-booked on {day} P{period} (Div {division} & Div {other_division})")]
    LecturerDoubleBooked {
        lecturer: String,
        day: String,
        period: u32,
        division: String,
        other_division: String,
    },

    #[error("Room {room} double-booked on {day} P{period} (Div {division} & Div {other_division})")]
    RoomDoubleBooked {
        room: String,
        day: String,
        period: u32,
        division: String,
        other_division: String,
    },

    #[error("Div {division}: Subject {subject} has {actual} periods, expected {expected}")]
    PeriodCountMismatch {
        division: String,
        subject: String,
        actual: u32,
        expected: u32,
    },

    #[error("Unknown division '{division}' in slot")]
    UnknownDivision { division: String },

    #[error("Invalid day '{day}' in slot for {subject}")]
    InvalidDay { day: String, subject: String },

    #[error("Invalid period {period} in slot for {subject}")]
    InvalidPeriod { period: u32, subject: String },

    #[error("Div {division}: Subject {subject} exceeds {MAX_DAILY_SUBJECT_PERIODS} periods on {day}")]
    SubjectOverloadOnDay {
        division: String,
        subject: String,
        day: String,
    },
}

/// Result of one validation run.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    /// Render all violations as feedback lines.
    pub fn render(&self) -> String {
        self.violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Validate a merged schedule against the request.
///
/// `specific_divisions` restricts only the per-division period-count check;
/// the global double-booking and day/period checks always run over all
/// slots, so a later division can never silently break an earlier accepted
/// one.
pub fn validate_schedule(
    slots: &[Slot],
    request: &TimetableRequest,
    specific_divisions: Option<&[String]>,
) -> ValidationReport {
    let mut violations = Vec::new();

    // 1. Global lecturer conflicts across all divisions.
    let mut lecturer_schedule: HashMap<(&str, u32, &str), &Slot> = HashMap::new();
    for slot in slots {
        let key = (slot.day.as_str(), slot.period, slot.lecturer.as_str());
        if let Some(prev) = lecturer_schedule.get(&key) {
            violations.push(Violation::LecturerDoubleBooked {
                lecturer: slot.lecturer.clone(),
                day: slot.day.clone(),
                period: slot.period,
                division: slot.division.clone(),
                other_division: prev.division.clone(),
            });
        }
        lecturer_schedule.insert(key, slot);
    }

    // 2. Global room conflicts.
    let mut room_schedule: HashMap<(&str, u32, &str), &Slot> = HashMap::new();
    for slot in slots {
        let key = (slot.day.as_str(), slot.period, slot.room.as_str());
        if let Some(prev) = room_schedule.get(&key) {
            violations.push(Violation::RoomDoubleBooked {
                room: slot.room.clone(),
                day: slot.day.clone(),
                period: slot.period,
                division: slot.division.clone(),
                other_division: prev.division.clone(),
            });
        }
        room_schedule.insert(key, slot);
    }

    // 3. Per-division per-subject period counts (restrictable).
    let mut counts: HashMap<(&str, &str), u32> = HashMap::new();
    for division in &request.divisions {
        for subject in &division.subjects {
            counts.insert((division.name.as_str(), subject.code.as_str()), 0);
        }
    }
    for slot in slots {
        if request.division(&slot.division).is_none() {
            violations.push(Violation::UnknownDivision {
                division: slot.division.clone(),
            });
            continue;
        }
        // Subjects not declared for this division are tolerated here; the
        // exact-count check below still fails if required subjects were
        // displaced.
        if let Some(count) = counts.get_mut(&(slot.division.as_str(), slot.subject.as_str())) {
            *count += 1;
        }
    }
    for division in &request.divisions {
        if let Some(only) = specific_divisions {
            if !only.iter().any(|name| name == &division.name) {
                continue;
            }
        }
        for subject in &division.subjects {
            let actual = counts[&(division.name.as_str(), subject.code.as_str())];
            if actual != subject.periods_per_week {
                violations.push(Violation::PeriodCountMismatch {
                    division: division.name.clone(),
                    subject: subject.code.clone(),
                    actual,
                    expected: subject.periods_per_week,
                });
            }
        }
    }

    // 4. Day and period bounds.
    let valid_days = &request.metadata.working_days;
    let max_period = request.metadata.periods_per_day;
    for slot in slots {
        if !valid_days.contains(&slot.day) {
            violations.push(Violation::InvalidDay {
                day: slot.day.clone(),
                subject: slot.subject.clone(),
            });
        }
        if slot.period < 1 || slot.period > max_period {
            violations.push(Violation::InvalidPeriod {
                period: slot.period,
                subject: slot.subject.clone(),
            });
        }
    }

    // 5. Per-day distribution cap for non-Lab subjects. One violation per
    // overloaded (division, day, subject), however far past the cap.
    let mut day_counts: HashMap<(&str, &str, &str), u32> = HashMap::new();
    for slot in slots.iter().filter(|s| !s.is_lab()) {
        *day_counts
            .entry((slot.division.as_str(), slot.day.as_str(), slot.subject.as_str()))
            .or_insert(0) += 1;
    }
    for ((division, day, subject), count) in &day_counts {
        if *count > MAX_DAILY_SUBJECT_PERIODS {
            violations.push(Violation::SubjectOverloadOnDay {
                division: (*division).to_string(),
                subject: (*subject).to_string(),
                day: (*day).to_string(),
            });
        }
    }

    ValidationReport {
        valid: violations.is_empty(),
        violations,
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
