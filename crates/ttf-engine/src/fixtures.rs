//! Shared request builders for engine tests.

use ttf_core::{
    Classroom, Division, Lecturer, Metadata, RoomKind, Slot, Subject, SubjectKind,
    TimetableRequest,
};

pub fn metadata() -> Metadata {
    Metadata {
        institution_name: "Test Institute".into(),
        department: "CS".into(),
        semester: 4,
        academic_year: "2025-26".into(),
        working_days: ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
            .iter()
            .map(ToString::to_string)
            .collect(),
        periods_per_day: 7,
        breaks: vec!["Lunch".into()],
    }
}

pub fn lecturer(id: &str, subjects: &[&str]) -> Lecturer {
    Lecturer {
        id: id.into(),
        name: format!("Lecturer {id}"),
        subjects: subjects.iter().map(ToString::to_string).collect(),
        max_periods_per_day: 4,
        available_days: metadata().working_days,
    }
}

pub fn classroom(id: &str) -> Classroom {
    Classroom {
        id: id.into(),
        capacity: 60,
        kind: RoomKind::Classroom,
    }
}

pub fn theory_subject(code: &str, periods_per_week: u32, lecturer_id: &str) -> Subject {
    Subject {
        code: code.into(),
        name: format!("Subject {code}"),
        kind: SubjectKind::Theory,
        periods_per_week,
        assigned_lecturer_id: Some(lecturer_id.into()),
    }
}

pub fn division(name: &str, subjects: Vec<Subject>) -> Division {
    Division {
        name: name.into(),
        strength: 60,
        subjects,
    }
}

/// One division ("A"), one theory subject CS301 needing `periods` per week,
/// lecturer L1, rooms R1/R2.
pub fn single_division_request(periods: u32) -> TimetableRequest {
    TimetableRequest {
        metadata: metadata(),
        divisions: vec![division("A", vec![theory_subject("CS301", periods, "L1")])],
        lecturers: vec![lecturer("L1", &["CS301"])],
        classrooms: vec![classroom("R1"), classroom("R2")],
        constraints: None,
    }
}

/// Two divisions ("A", "B") sharing lecturer L1 for the same subject code.
pub fn shared_lecturer_request() -> TimetableRequest {
    TimetableRequest {
        metadata: metadata(),
        divisions: vec![
            division("A", vec![theory_subject("CS301", 3, "L1")]),
            division("B", vec![theory_subject("CS301", 3, "L1")]),
        ],
        lecturers: vec![lecturer("L1", &["CS301"])],
        classrooms: vec![classroom("R1"), classroom("R2")],
        constraints: None,
    }
}

pub fn slot(division: &str, day: &str, period: u32, subject: &str, lecturer: &str, room: &str) -> Slot {
    Slot {
        division: division.into(),
        day: day.into(),
        period,
        subject: subject.into(),
        lecturer: lecturer.into(),
        room: room.into(),
        kind: "Theory".into(),
    }
}

pub fn lab_slot(division: &str, day: &str, period: u32, subject: &str) -> Slot {
    Slot {
        division: division.into(),
        day: day.into(),
        period,
        subject: subject.into(),
        lecturer: "L9".into(),
        room: "LAB1".into(),
        kind: "Lab".into(),
    }
}
