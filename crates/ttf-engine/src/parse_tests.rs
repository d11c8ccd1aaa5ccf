use super::*;

const ONE_SLOT: &str = r#"{"slots": [{"division": "A", "day": "Monday", "period": 1,
    "subject": "CS301", "lecturer": "L1", "room": "R1", "type": "Theory"}]}"#;

#[test]
fn test_parse_plain_json() {
    let slots = parse_candidate_slots(ONE_SLOT).unwrap();
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].division, "A");
    assert_eq!(slots[0].period, 1);
    assert_eq!(slots[0].kind, "Theory");
}

#[test]
fn test_parse_json_fence() {
    let raw = format!("Here is the timetable:\n```json\n{ONE_SLOT}\n```\nDone.");
    let slots = parse_candidate_slots(&raw).unwrap();
    assert_eq!(slots.len(), 1);
}

#[test]
fn test_parse_bare_fence() {
    let raw = format!("```\n{ONE_SLOT}\n```");
    let slots = parse_candidate_slots(&raw).unwrap();
    assert_eq!(slots.len(), 1);
}

#[test]
fn test_parse_surrounding_prose() {
    let raw = format!("Sure! {ONE_SLOT} Let me know if you need changes.");
    let slots = parse_candidate_slots(&raw).unwrap();
    assert_eq!(slots.len(), 1);
}

#[test]
fn test_missing_slots_key_is_empty_batch() {
    let slots = parse_candidate_slots(r#"{"schedule": []}"#).unwrap();
    assert!(slots.is_empty());
}

#[test]
fn test_non_json_is_parse_failure() {
    let err = parse_candidate_slots("I cannot generate a timetable.").unwrap_err();
    assert!(matches!(err, ttf_core::EngineError::ParseFailure(_)));
}

#[test]
fn test_malformed_slot_is_parse_failure() {
    // period as a string instead of a number
    let raw = r#"{"slots": [{"division": "A", "day": "Monday", "period": "one",
        "subject": "CS301", "lecturer": "L1", "room": "R1", "type": "Theory"}]}"#;
    assert!(parse_candidate_slots(raw).is_err());
}
