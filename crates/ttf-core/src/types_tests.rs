use super::*;

#[test]
fn test_metadata_defaults() {
    let json = r#"{
        "institution_name": "Test Institute",
        "department": "CS",
        "semester": 4,
        "academic_year": "2025-26"
    }"#;
    let meta: Metadata = serde_json::from_str(json).unwrap();
    assert_eq!(meta.working_days.len(), 5);
    assert_eq!(meta.working_days[0], "Monday");
    assert_eq!(meta.periods_per_day, 7);
    assert_eq!(meta.breaks, vec!["Lunch".to_string()]);
}

#[test]
fn test_lecturer_defaults() {
    let json = r#"{"id": "L1", "name": "Dr. Rao", "subjects": ["CS301"]}"#;
    let lecturer: Lecturer = serde_json::from_str(json).unwrap();
    assert_eq!(lecturer.max_periods_per_day, 4);
    assert_eq!(lecturer.available_days.len(), 5);
}

#[test]
fn test_slot_wire_shape_uses_type_key() {
    let slot = Slot {
        division: "A".into(),
        day: "Monday".into(),
        period: 1,
        subject: "CS301".into(),
        lecturer: "L1".into(),
        room: "R1".into(),
        kind: "Theory".into(),
    };
    let json = serde_json::to_value(&slot).unwrap();
    assert_eq!(json["type"], "Theory");
    assert!(json.get("kind").is_none());
}

#[test]
fn test_slot_is_lab_exact_match_only() {
    let mut slot = Slot {
        division: "A".into(),
        day: "Monday".into(),
        period: 1,
        subject: "CS305".into(),
        lecturer: "L2".into(),
        room: "LAB1".into(),
        kind: "Lab".into(),
    };
    assert!(slot.is_lab());
    slot.kind = "lab".into();
    assert!(!slot.is_lab());
    slot.kind = "Theory".into();
    assert!(!slot.is_lab());
}

#[test]
fn test_subject_kind_roundtrip() {
    let subject: Subject = serde_json::from_str(
        r#"{"code": "CS305", "name": "OS Lab", "type": "Lab", "periods_per_week": 2}"#,
    )
    .unwrap();
    assert_eq!(subject.kind, SubjectKind::Lab);
    assert!(subject.assigned_lecturer_id.is_none());
    let back = serde_json::to_value(&subject).unwrap();
    assert_eq!(back["type"], "Lab");
}

#[test]
fn test_division_default_strength() {
    let division: Division =
        serde_json::from_str(r#"{"name": "A", "subjects": []}"#).unwrap();
    assert_eq!(division.strength, 60);
}

#[test]
fn test_timetable_to_request_carries_constraints() {
    let timetable = Timetable {
        timetable_id: "01ARZ3NDEKTSV4RRFFQ69G5FAV".into(),
        metadata: serde_json::from_str(
            r#"{"institution_name": "T", "department": "CS", "semester": 1, "academic_year": "2025-26"}"#,
        )
        .unwrap(),
        divisions: vec![],
        lecturers: vec![],
        classrooms: vec![],
        slots: vec![],
    };
    let request = timetable.to_request(vec!["No Friday labs".into()]);
    assert_eq!(
        request.constraints,
        Some(vec!["No Friday labs".to_string()])
    );
    let bare = timetable.to_request(vec![]);
    assert!(bare.constraints.is_none());
}
