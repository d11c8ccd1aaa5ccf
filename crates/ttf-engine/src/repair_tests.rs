use super::*;
use crate::fixtures;

#[test]
fn test_exact_count_schedule_unchanged() {
    let request = fixtures::single_division_request(3);
    let slots = vec![
        fixtures::slot("A", "Monday", 1, "CS301", "L1", "R1"),
        fixtures::slot("A", "Tuesday", 1, "CS301", "L1", "R1"),
        fixtures::slot("A", "Wednesday", 1, "CS301", "L1", "R1"),
    ];
    let repaired = drop_excess_slots(slots.clone(), &request);
    assert_eq!(repaired, slots);
}

#[test]
fn test_excess_trimmed_from_the_end() {
    let request = fixtures::single_division_request(3);
    let slots = vec![
        fixtures::slot("A", "Monday", 1, "CS301", "L1", "R1"),
        fixtures::slot("A", "Tuesday", 1, "CS301", "L1", "R1"),
        fixtures::slot("A", "Wednesday", 1, "CS301", "L1", "R1"),
        fixtures::slot("A", "Thursday", 1, "CS301", "L1", "R1"),
        fixtures::slot("A", "Friday", 1, "CS301", "L1", "R1"),
    ];
    let repaired = drop_excess_slots(slots, &request);
    assert_eq!(repaired.len(), 3);
    // First three in encounter order survive.
    assert_eq!(repaired[0].day, "Monday");
    assert_eq!(repaired[1].day, "Tuesday");
    assert_eq!(repaired[2].day, "Wednesday");
}

#[test]
fn test_under_count_not_padded() {
    let request = fixtures::single_division_request(3);
    let slots = vec![fixtures::slot("A", "Monday", 1, "CS301", "L1", "R1")];
    let repaired = drop_excess_slots(slots, &request);
    assert_eq!(repaired.len(), 1);
}

#[test]
fn test_unknown_pairs_left_alone() {
    let request = fixtures::single_division_request(1);
    // Subject the division never declared; not ours to trim.
    let slots = vec![
        fixtures::slot("A", "Monday", 1, "CS301", "L1", "R1"),
        fixtures::slot("A", "Monday", 2, "MA999", "L1", "R1"),
        fixtures::slot("A", "Monday", 3, "MA999", "L1", "R1"),
    ];
    let repaired = drop_excess_slots(slots, &request);
    assert_eq!(repaired.len(), 3);
}

#[test]
fn test_per_division_independence() {
    let request = fixtures::shared_lecturer_request();
    // A has one excess slot; B is exact. Only A is trimmed.
    let mut slots = vec![
        fixtures::slot("A", "Monday", 1, "CS301", "L1", "R1"),
        fixtures::slot("A", "Tuesday", 1, "CS301", "L1", "R1"),
        fixtures::slot("A", "Wednesday", 1, "CS301", "L1", "R1"),
        fixtures::slot("A", "Thursday", 1, "CS301", "L1", "R1"),
    ];
    slots.extend(vec![
        fixtures::slot("B", "Monday", 2, "CS301", "L1", "R1"),
        fixtures::slot("B", "Tuesday", 2, "CS301", "L1", "R1"),
        fixtures::slot("B", "Wednesday", 2, "CS301", "L1", "R1"),
    ]);
    let repaired = drop_excess_slots(slots, &request);
    assert_eq!(repaired.iter().filter(|s| s.division == "A").count(), 3);
    assert_eq!(repaired.iter().filter(|s| s.division == "B").count(), 3);
    assert!(!repaired.iter().any(|s| s.division == "A" && s.day == "Thursday"));
}
