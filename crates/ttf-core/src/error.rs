#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    #[error("Oracle failure: {0}")]
    OracleFailure(String),

    #[error("Oracle response is not valid slot data: {0}")]
    ParseFailure(String),

    #[error(
        "Retry budget exhausted for division '{division}' after {attempts} attempts. Last error: {last_error}"
    )]
    RetryBudgetExhausted {
        division: String,
        attempts: u32,
        last_error: String,
    },

    #[error("Request contains no divisions")]
    EmptyRequest,

    #[error("Invalid timetable ID '{0}': expected ULID format (26 chars Crockford Base32)")]
    InvalidTimetableId(String),

    #[error("No timetable matching '{0}'")]
    TimetableNotFound(String),

    #[error("Ambiguous timetable ID prefix '{0}': matches multiple timetables")]
    AmbiguousTimetablePrefix(String),
}
