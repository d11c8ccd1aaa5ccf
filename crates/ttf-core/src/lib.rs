//! Core data model for the timetable generator.

pub mod error;
pub mod id;
pub mod types;

pub use error::EngineError;
pub use id::{new_timetable_id, validate_timetable_id};
pub use types::{
    Classroom, Division, Lecturer, Metadata, OutputFormat, RoomKind, Slot, Subject, SubjectKind,
    Timetable, TimetableRequest,
};
