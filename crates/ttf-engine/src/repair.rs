//! Excess-slot repairer.
//!
//! Safety net, independent of the orchestration loop: trims slots beyond a
//! subject's required weekly count. Under-count is a validator defect that
//! needs regeneration; this pass never adds slots.

use std::collections::HashMap;

use tracing::info;
use ttf_core::{Slot, TimetableRequest};

/// Drop the last N slots (in encounter order) for any (division, subject)
/// whose assigned count exceeds the requirement. Slots for pairs the request
/// does not declare are left alone.
pub fn drop_excess_slots(slots: Vec<Slot>, request: &TimetableRequest) -> Vec<Slot> {
    if slots.is_empty() {
        return slots;
    }

    let mut required: HashMap<(&str, &str), u32> = HashMap::new();
    for division in &request.divisions {
        for subject in &division.subjects {
            required.insert(
                (division.name.as_str(), subject.code.as_str()),
                subject.periods_per_week,
            );
        }
    }

    let mut totals: HashMap<(String, String), u32> = HashMap::new();
    for slot in &slots {
        *totals
            .entry((slot.division.clone(), slot.subject.clone()))
            .or_insert(0) += 1;
    }

    for ((division, subject), total) in &totals {
        if let Some(&want) = required.get(&(division.as_str(), subject.as_str())) {
            if *total > want {
                info!(
                    division = %division,
                    subject = %subject,
                    have = total,
                    want,
                    "trimming excess periods"
                );
            }
        }
    }

    // Keep the first `required` occurrences of each over-count pair.
    let mut kept: HashMap<(String, String), u32> = HashMap::new();
    slots
        .into_iter()
        .filter(|slot| {
            let Some(&want) = required.get(&(slot.division.as_str(), slot.subject.as_str()))
            else {
                return true;
            };
            let key = (slot.division.clone(), slot.subject.clone());
            if totals[&key] <= want {
                return true;
            }
            let seen = kept.entry(key).or_insert(0);
            *seen += 1;
            *seen <= want
        })
        .collect()
}

#[cfg(test)]
#[path = "repair_tests.rs"]
mod tests;
