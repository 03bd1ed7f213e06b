//! Unit tests for effort log entries and their aggregations.

use super::{contributor, date, new_task};
use crate::work::domain::{effort, EffortLogEntry, WorkDomainError};
use rstest::rstest;

#[rstest]
fn new_builds_a_validated_entry() {
    let task = new_task();
    let user = contributor("ana");
    let entry = EffortLogEntry::new(&task, &user, date(2025, 1, 3), 4, " pairing ")
        .expect("valid entry");
    assert_eq!(entry.task_id(), task.id());
    assert_eq!(entry.user_id(), user.id());
    assert_eq!(entry.hours(), 4);
    assert_eq!(entry.note(), "pairing");
}

#[rstest]
fn zero_hours_are_rejected() {
    let task = new_task();
    let user = contributor("ana");
    assert_eq!(
        EffortLogEntry::new(&task, &user, date(2025, 1, 3), 0, ""),
        Err(WorkDomainError::ZeroEffortHours)
    );
}

#[rstest]
fn entries_before_the_task_start_are_rejected() {
    let task = new_task();
    let user = contributor("ana");
    assert_eq!(
        EffortLogEntry::new(&task, &user, date(2024, 12, 31), 2, ""),
        Err(WorkDomainError::EffortBeforeTaskStart {
            task_start: date(2025, 1, 1),
            date: date(2024, 12, 31),
        })
    );
}

#[rstest]
fn entries_on_the_start_date_are_accepted() {
    let task = new_task();
    let user = contributor("ana");
    assert!(EffortLogEntry::new(&task, &user, date(2025, 1, 1), 1, "").is_ok());
}

// ── aggregations ───────────────────────────────────────────────────

#[rstest]
fn total_hours_sums_all_entries() {
    let task = new_task();
    let ana = contributor("ana");
    let bruno = contributor("bruno");
    let entries = vec![
        EffortLogEntry::new(&task, &ana, date(2025, 1, 2), 3, "").expect("valid entry"),
        EffortLogEntry::new(&task, &bruno, date(2025, 1, 3), 5, "").expect("valid entry"),
    ];
    assert_eq!(effort::total_hours(&entries), 8);
    assert_eq!(effort::total_hours(&[]), 0);
}

#[rstest]
fn hours_by_user_groups_on_identity() {
    let task = new_task();
    let ana = contributor("ana");
    let bruno = contributor("bruno");
    let entries = vec![
        EffortLogEntry::new(&task, &ana, date(2025, 1, 2), 3, "").expect("valid entry"),
        EffortLogEntry::new(&task, &ana, date(2025, 1, 3), 2, "").expect("valid entry"),
        EffortLogEntry::new(&task, &bruno, date(2025, 1, 3), 5, "").expect("valid entry"),
    ];
    let totals = effort::hours_by_user(&entries);
    assert_eq!(totals.get(&ana.id()), Some(&5));
    assert_eq!(totals.get(&bruno.id()), Some(&5));
}

#[rstest]
fn hours_by_task_groups_on_the_task() {
    let first_task = new_task();
    let second_task = new_task();
    let ana = contributor("ana");
    let entries = vec![
        EffortLogEntry::new(&first_task, &ana, date(2025, 1, 2), 3, "").expect("valid entry"),
        EffortLogEntry::new(&second_task, &ana, date(2025, 1, 3), 2, "").expect("valid entry"),
        EffortLogEntry::new(&first_task, &ana, date(2025, 1, 4), 1, "").expect("valid entry"),
    ];
    let totals = effort::hours_by_task(&entries);
    assert_eq!(totals.get(&first_task.id()), Some(&4));
    assert_eq!(totals.get(&second_task.id()), Some(&2));
}

#[rstest]
fn within_period_is_inclusive_and_sorted() {
    let task = new_task();
    let ana = contributor("ana");
    let entries = vec![
        EffortLogEntry::new(&task, &ana, date(2025, 1, 6), 1, "").expect("valid entry"),
        EffortLogEntry::new(&task, &ana, date(2025, 1, 2), 2, "").expect("valid entry"),
        EffortLogEntry::new(&task, &ana, date(2025, 1, 4), 3, "").expect("valid entry"),
    ];

    let bounded = effort::within_period(&entries, date(2025, 1, 2), Some(date(2025, 1, 4)));
    let dates: Vec<_> = bounded.iter().map(|entry| entry.date()).collect();
    assert_eq!(dates, [date(2025, 1, 2), date(2025, 1, 4)]);

    let unbounded = effort::within_period(&entries, date(2025, 1, 4), None);
    assert_eq!(unbounded.len(), 2);
}
