//! ULID timetable identifiers

use crate::error::EngineError;

/// Generate a new ULID timetable ID
pub fn new_timetable_id() -> String {
    ulid::Ulid::new().to_string()
}

/// Validate that a string is a valid ULID
pub fn validate_timetable_id(id: &str) -> Result<(), EngineError> {
    if id.len() != 26 {
        return Err(EngineError::InvalidTimetableId(id.to_string()));
    }
    ulid::Ulid::from_string(id)
        .map_err(|_| EngineError::InvalidTimetableId(id.to_string()))?;
    Ok(())
}
