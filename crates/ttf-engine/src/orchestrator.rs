//! Per-division retry orchestrator.
//!
//! Sequences spec builder -> oracle -> resolver -> optimizer -> validator for
//! each division in request order, feeding violations back into the next
//! attempt's spec. The committed-slot accumulator is exclusively owned here
//! and only grows when a division is accepted; a division that exhausts its
//! retry budget aborts the whole run with nothing partial to persist.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::time::timeout;
use tracing::{debug, info, warn};
use ttf_config::GenerationConfig;
use ttf_core::{new_timetable_id, Division, EngineError, Slot, Timetable, TimetableRequest};

use crate::optimize_distribution;
use crate::oracle::SlotOracle;
use crate::parse::parse_candidate_slots;
use crate::resolver::resolve_conflicts;
use crate::spec::build_generation_spec;
use crate::validator::validate_schedule;

/// Where one division currently is in its generation lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum DivisionPhase {
    /// Spec builder runs.
    Building,
    /// Oracle returned a candidate (or failed).
    Generated,
    /// Conflict resolver ran.
    Resolved,
    /// Distribution optimizer ran.
    Optimized,
    /// Validator runs over committed ∪ candidate.
    Validating,
    /// Candidate merged into the committed set.
    Accepted,
    /// Feedback folded into the spec; attempt counter incremented.
    Retrying,
    /// Retry budget spent without acceptance. Terminal for the whole run.
    Exhausted,
}

impl DivisionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Building => "building",
            Self::Generated => "generated",
            Self::Resolved => "resolved",
            Self::Optimized => "optimized",
            Self::Validating => "validating",
            Self::Accepted => "accepted",
            Self::Retrying => "retrying",
            Self::Exhausted => "exhausted",
        }
    }
}

impl std::fmt::Display for DivisionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Drives the full generate-repair-validate cycle against one oracle.
pub struct Orchestrator<'a, O: SlotOracle + ?Sized> {
    oracle: &'a O,
    config: GenerationConfig,
}

impl<'a, O: SlotOracle + ?Sized> Orchestrator<'a, O> {
    pub fn new(oracle: &'a O, config: GenerationConfig) -> Self {
        Self { oracle, config }
    }

    /// Generate a full timetable, processing divisions strictly in request
    /// order. Division i+1's spec depends on division i's accepted slots, so
    /// there is no concurrency across divisions.
    pub async fn run<R: Rng + Send>(
        &self,
        request: &TimetableRequest,
        rng: &mut R,
    ) -> Result<Timetable, EngineError> {
        if request.divisions.is_empty() {
            return Err(EngineError::EmptyRequest);
        }

        let mut committed: Vec<Slot> = Vec::new();
        for division in &request.divisions {
            info!(division = %division.name, "generating schedule for division");
            let accepted = self
                .run_division(request, division, &committed, rng)
                .await?;
            committed.extend(accepted);
        }

        Ok(Timetable {
            timetable_id: new_timetable_id(),
            metadata: request.metadata.clone(),
            divisions: request.divisions.clone(),
            lecturers: request.lecturers.clone(),
            classrooms: request.classrooms.clone(),
            slots: committed,
        })
    }

    /// Bounded attempt loop for one division. Returns the accepted batch.
    async fn run_division<R: Rng + Send>(
        &self,
        request: &TimetableRequest,
        division: &Division,
        committed: &[Slot],
        rng: &mut R,
    ) -> Result<Vec<Slot>, EngineError> {
        let budget = self.config.retry_budget;
        let oracle_timeout = Duration::from_secs(self.config.oracle_timeout_secs);

        let mut phase = DivisionPhase::Building;
        let mut spec = build_generation_spec(request, division, committed);
        let mut last_error = String::from("no attempts made");

        for attempt in 1..=budget {
            info!(division = %division.name, attempt, budget, %phase, "attempt start");

            // Building -> Generated. The oracle call is the only unbounded
            // operation; a timeout counts as a failed attempt (no
            // cancellation of the in-flight call beyond dropping it).
            let raw = match timeout(oracle_timeout, self.oracle.propose(&spec)).await {
                Ok(Ok(raw)) => raw,
                Ok(Err(e)) => {
                    last_error = EngineError::OracleFailure(format!("{e:#}")).to_string();
                    warn!(division = %division.name, attempt, error = %last_error, "oracle failed");
                    spec.push_oracle_error(&last_error);
                    phase = DivisionPhase::Retrying;
                    continue;
                }
                Err(_) => {
                    last_error = EngineError::OracleFailure(format!(
                        "call timed out after {}s",
                        oracle_timeout.as_secs()
                    ))
                    .to_string();
                    warn!(division = %division.name, attempt, "oracle timed out");
                    spec.push_oracle_error(&last_error);
                    phase = DivisionPhase::Retrying;
                    continue;
                }
            };
            phase = DivisionPhase::Generated;
            debug!(division = %division.name, attempt, %phase, bytes = raw.len(), "oracle responded");

            let batch = match parse_candidate_slots(&raw) {
                Ok(batch) => batch,
                Err(e) => {
                    last_error = e.to_string();
                    warn!(division = %division.name, attempt, error = %last_error, "candidate unparseable");
                    if let EngineError::ParseFailure(detail) = &e {
                        spec.push_parse_error(detail);
                    }
                    phase = DivisionPhase::Retrying;
                    continue;
                }
            };
            info!(division = %division.name, attempt, slots = batch.len(), "candidate received");

            // Resolver and optimizer run unconditionally on every candidate.
            let batch = resolve_conflicts(batch, committed, request);
            phase = DivisionPhase::Resolved;
            debug!(division = %division.name, attempt, %phase, "conflicts resolved");
            let batch = optimize_distribution(
                batch,
                committed,
                request,
                self.config.optimizer_passes,
                rng,
            );
            phase = DivisionPhase::Optimized;
            debug!(division = %division.name, attempt, %phase, "distribution optimized");

            phase = DivisionPhase::Validating;
            debug!(division = %division.name, attempt, %phase, "validating merged schedule");
            let mut merged = committed.to_vec();
            merged.extend(batch.iter().cloned());
            let only = [division.name.clone()];
            let report = validate_schedule(&merged, request, Some(&only));

            if report.valid {
                phase = DivisionPhase::Accepted;
                info!(division = %division.name, attempt, slots = batch.len(), %phase, "division accepted");
                return Ok(batch);
            }

            last_error = report.render();
            warn!(
                division = %division.name,
                attempt,
                violations = report.violations.len(),
                "validation failed"
            );
            spec.push_violations(&report.violations);
            phase = DivisionPhase::Retrying;
        }

        phase = DivisionPhase::Exhausted;
        warn!(division = %division.name, budget, %phase, "retry budget exhausted");
        Err(EngineError::RetryBudgetExhausted {
            division: division.name.clone(),
            attempts: budget,
            last_error,
        })
    }
}

/// Convenience entry point with OS-seeded randomness.
pub async fn generate_timetable<O: SlotOracle + ?Sized>(
    oracle: &O,
    request: &TimetableRequest,
    config: GenerationConfig,
) -> Result<Timetable, EngineError> {
    let mut rng = StdRng::from_os_rng();
    Orchestrator::new(oracle, config).run(request, &mut rng).await
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
