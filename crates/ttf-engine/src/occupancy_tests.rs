use super::*;

fn slot(division: &str, day: &str, period: u32, lecturer: &str, room: &str) -> Slot {
    Slot {
        division: division.into(),
        day: day.into(),
        period,
        subject: "CS301".into(),
        lecturer: lecturer.into(),
        room: room.into(),
        kind: "Theory".into(),
    }
}

#[test]
fn test_empty_index_is_never_busy() {
    let index = OccupancyIndex::from_slots(&[]);
    assert!(index.is_empty());
    assert!(!index.is_busy("Monday", 1, "L1", "R1"));
}

#[test]
fn test_busy_lecturer_detected() {
    let index = OccupancyIndex::from_slots(&[slot("A", "Monday", 1, "L1", "R1")]);
    assert!(index.is_busy("Monday", 1, "L1", "R9"));
    assert!(index.is_busy("Monday", 1, "L9", "R1"));
    assert!(!index.is_busy("Monday", 1, "L9", "R9"));
    assert!(!index.is_busy("Monday", 2, "L1", "R1"));
    assert!(!index.is_busy("Tuesday", 1, "L1", "R1"));
}

#[test]
fn test_multiple_divisions_accumulate() {
    let index = OccupancyIndex::from_slots(&[
        slot("A", "Monday", 1, "L1", "R1"),
        slot("B", "Monday", 1, "L2", "R2"),
    ]);
    let busy = index.get("Monday", 1).unwrap();
    assert_eq!(busy.lecturers.len(), 2);
    assert_eq!(busy.rooms.len(), 2);
}
