//! Scheduling & conflict-resolution engine.
//!
//! Divisions are processed strictly in request order. For each division the
//! orchestrator builds a generation spec from the committed slots so far,
//! asks the oracle for a candidate batch, deterministically repairs and
//! optimizes it, validates the merged schedule, and retries with violation
//! feedback until the division is accepted or the retry budget runs out.

pub mod occupancy;
pub mod optimizer;
pub mod oracle;
pub mod orchestrator;
pub mod parse;
pub mod repair;
pub mod resolver;
pub mod spec;
pub mod validator;

#[cfg(test)]
pub(crate) mod fixtures;

pub use occupancy::OccupancyIndex;
pub use optimizer::optimize_distribution;
pub use oracle::{ScriptedOracle, SlotOracle};
pub use orchestrator::{generate_timetable, DivisionPhase, Orchestrator};
pub use parse::parse_candidate_slots;
pub use repair::drop_excess_slots;
pub use resolver::resolve_conflicts;
pub use spec::{build_generation_spec, GenerationSpec};
pub use validator::{validate_schedule, ValidationReport, Violation, MAX_DAILY_SUBJECT_PERIODS};
