//! Distribution optimizer.
//!
//! Spreads subjects across the week so no more than
//! [`MAX_DAILY_SUBJECT_PERIODS`](crate::validator::MAX_DAILY_SUBJECT_PERIODS)
//! periods of the same non-Lab subject land on one day. Target days are
//! shuffled on purpose: spreading load across runs beats always favoring the
//! same day, and no invariant depends on which free day is chosen.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};
use ttf_core::{Slot, TimetableRequest};

use crate::occupancy::OccupancyIndex;
use crate::validator::MAX_DAILY_SUBJECT_PERIODS;

/// Relocate overloaded slots without reintroducing resource collisions.
///
/// Bounded to `passes` iterations; converges early when no overload remains.
/// Lab slots neither count toward the per-day cap nor get relocated.
pub fn optimize_distribution<R: Rng>(
    mut batch: Vec<Slot>,
    committed: &[Slot],
    request: &TimetableRequest,
    passes: u32,
    rng: &mut R,
) -> Vec<Slot> {
    if batch.is_empty() {
        return batch;
    }

    let occupied = OccupancyIndex::from_slots(committed);
    let working_days = &request.metadata.working_days;
    let periods_per_day = request.metadata.periods_per_day;

    for pass in 0..passes {
        // (day, subject) -> non-Lab period count
        let mut day_counts: HashMap<(String, String), u32> = HashMap::new();
        for slot in batch.iter().filter(|s| !s.is_lab()) {
            *day_counts
                .entry((slot.day.clone(), slot.subject.clone()))
                .or_insert(0) += 1;
        }

        let overloaded: Vec<usize> = batch
            .iter()
            .enumerate()
            .filter(|(_, s)| {
                !s.is_lab()
                    && day_counts[&(s.day.clone(), s.subject.clone())]
                        > MAX_DAILY_SUBJECT_PERIODS
            })
            .map(|(i, _)| i)
            .collect();

        if overloaded.is_empty() {
            debug!(pass, "distribution clean, optimizer converged");
            break;
        }

        for index in overloaded {
            let (origin_day, subject) = (batch[index].day.clone(), batch[index].subject.clone());

            // A previous move in this pass may have already fixed this day.
            if day_counts[&(origin_day.clone(), subject.clone())] <= MAX_DAILY_SUBJECT_PERIODS {
                continue;
            }

            let mut target_days: Vec<&String> = working_days
                .iter()
                .filter(|day| {
                    day_counts
                        .get(&((*day).clone(), subject.clone()))
                        .copied()
                        .unwrap_or(0)
                        < MAX_DAILY_SUBJECT_PERIODS
                })
                .collect();
            target_days.shuffle(rng);

            let target = target_days.iter().find_map(|day| {
                (1..=periods_per_day)
                    .find(|&period| is_target_free(&batch, index, &occupied, day, period))
                    .map(|period| ((*day).clone(), period))
            });

            match target {
                Some((day, period)) => {
                    debug!(
                        subject = %subject,
                        from = %origin_day,
                        to = %day,
                        "spreading overloaded subject"
                    );
                    if let Some(count) = day_counts.get_mut(&(origin_day, subject.clone())) {
                        *count -= 1;
                    }
                    *day_counts.entry((day.clone(), subject)).or_insert(0) += 1;
                    batch[index].day = day;
                    batch[index].period = period;
                }
                None => {
                    warn!(
                        subject = %subject,
                        day = %origin_day,
                        "no valid relocation target, leaving overload in place"
                    );
                }
            }
        }
    }

    batch
}

/// A target (day, period) must be free against committed resources and not
/// already hold another slot of this batch (one class at a time per
/// division).
fn is_target_free(
    batch: &[Slot],
    moving: usize,
    occupied: &OccupancyIndex,
    day: &str,
    period: u32,
) -> bool {
    if occupied.is_busy(day, period, &batch[moving].lecturer, &batch[moving].room) {
        return false;
    }
    !batch
        .iter()
        .enumerate()
        .any(|(i, s)| i != moving && s.day == day && s.period == period)
}

#[cfg(test)]
#[path = "optimizer_tests.rs"]
mod tests;
