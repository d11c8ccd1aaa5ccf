//! Hardening for untrusted oracle output.

use serde::Deserialize;
use ttf_core::{EngineError, Slot};

#[derive(Deserialize)]
struct CandidatePayload {
    /// A well-formed object with no `slots` key parses as an empty batch;
    /// the validator then reports the missing periods.
    #[serde(default)]
    slots: Vec<Slot>,
}

/// Parse a raw oracle response into a candidate slot batch.
///
/// Models wrap JSON in markdown fences or prose more often than not, so the
/// response is first trimmed to the outermost `{...}` object. Anything that
/// still fails to deserialize is a [`EngineError::ParseFailure`], never a
/// panic.
pub fn parse_candidate_slots(raw: &str) -> Result<Vec<Slot>, EngineError> {
    let trimmed = extract_json_object(raw);
    let payload: CandidatePayload = serde_json::from_str(trimmed)
        .map_err(|e| EngineError::ParseFailure(e.to_string()))?;
    Ok(payload.slots)
}

/// Strip markdown fences and trim to the outermost `{...}` bounds.
fn extract_json_object(raw: &str) -> &str {
    let mut content = raw;

    if let Some(fenced) = content.split("```json").nth(1) {
        content = fenced.split("```").next().unwrap_or(fenced);
    } else if let Some(fenced) = content.split("```").nth(1) {
        content = fenced;
    }

    match (content.find('{'), content.rfind('}')) {
        (Some(start), Some(end)) if start < end => &content[start..=end],
        _ => content.trim(),
    }
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
