//! Deterministic conflict resolver.
//!
//! Greedy, order-dependent, single-pass repair: each proposed slot is tested
//! against the committed occupancy index and against the slots already placed
//! earlier in this pass, and relocated to the first free (day, period) pair
//! when it collides. Residual conflicts are left for the validator; slots are
//! never dropped.

use tracing::warn;
use ttf_core::{Slot, TimetableRequest};

use crate::occupancy::OccupancyIndex;

/// Resolve resource collisions in `batch` against `committed` slots from
/// other divisions. Preserves cardinality and proposal order.
pub fn resolve_conflicts(
    batch: Vec<Slot>,
    committed: &[Slot],
    request: &TimetableRequest,
) -> Vec<Slot> {
    if batch.is_empty() {
        return batch;
    }

    let occupied = OccupancyIndex::from_slots(committed);
    let working_days = &request.metadata.working_days;
    let periods_per_day = request.metadata.periods_per_day;

    let mut resolved: Vec<Slot> = Vec::with_capacity(batch.len());

    for mut slot in batch {
        let collides = occupied.is_busy(&slot.day, slot.period, &slot.lecturer, &slot.room)
            || collides_internally(&resolved, &slot.day, slot.period, &slot.lecturer, &slot.room);

        if !collides {
            resolved.push(slot);
            continue;
        }

        // Candidate pairs in fixed order: configured days x periods 1..=N.
        let target = working_days.iter().find_map(|day| {
            (1..=periods_per_day).find_map(|period| {
                let free = !occupied.is_busy(day, period, &slot.lecturer, &slot.room)
                    && !collides_internally(&resolved, day, period, &slot.lecturer, &slot.room);
                free.then(|| (day.clone(), period))
            })
        });

        match target {
            Some((day, period)) => {
                warn!(
                    division = %slot.division,
                    subject = %slot.subject,
                    from = %format!("{} P{}", slot.day, slot.period),
                    to = %format!("{day} P{period}"),
                    "relocating conflicting slot"
                );
                slot.day = day;
                slot.period = period;
                resolved.push(slot);
            }
            None => {
                // Full day x period space exhausted; keep the collision for
                // the validator to report.
                warn!(
                    division = %slot.division,
                    subject = %slot.subject,
                    "no free slot found, leaving conflict in place"
                );
                resolved.push(slot);
            }
        }
    }

    resolved
}

fn collides_internally(
    placed: &[Slot],
    day: &str,
    period: u32,
    lecturer: &str,
    room: &str,
) -> bool {
    placed.iter().any(|s| {
        s.day == day && s.period == period && (s.lecturer == lecturer || s.room == room)
    })
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
