//! Unit tests for the task aggregate.

use super::{date, new_task, project};
use crate::work::domain::{Priority, Task, TaskDraft, TaskStatus, WorkDomainError};
use mockable::DefaultClock;
use rstest::rstest;

// ── construction ───────────────────────────────────────────────────

#[rstest]
fn create_starts_new_with_defaults() {
    let task = new_task();
    assert_eq!(task.status(), TaskStatus::New);
    assert_eq!(task.priority(), Priority::Medium);
    assert_eq!(task.estimated_hours(), 8);
    assert_eq!(task.actual_hours(), 0);
    assert_eq!(task.completed_on(), None);
    assert_eq!(task.assignee(), None);
}

#[rstest]
fn create_rejects_a_blank_title() {
    let clock = DefaultClock;
    let draft = TaskDraft::new(&project(), "   ", date(2025, 1, 1), date(2025, 1, 10));
    assert_eq!(
        Task::create(draft, &clock),
        Err(WorkDomainError::Required("title"))
    );
}

#[rstest]
fn create_rejects_an_end_before_the_start() {
    let clock = DefaultClock;
    let draft = TaskDraft::new(&project(), "Totals", date(2025, 1, 10), date(2025, 1, 1));
    assert_eq!(
        Task::create(draft, &clock),
        Err(WorkDomainError::EndBeforeStart {
            start: date(2025, 1, 10),
            end: date(2025, 1, 1),
        })
    );
}

// ── status changes ─────────────────────────────────────────────────

#[rstest]
fn change_status_refuses_done_even_when_reachable() {
    let clock = DefaultClock;
    let mut task = new_task();
    task.start(&clock).expect("new tasks may start");

    let task_id = task.id();
    let result = task.change_status(TaskStatus::Done, &clock);
    assert_eq!(
        result,
        Err(WorkDomainError::CompleteViaStatusChange(task_id))
    );
    assert_eq!(task.status(), TaskStatus::InProgress);
}

#[rstest]
fn change_status_rejects_pairs_outside_the_table() {
    let clock = DefaultClock;
    let mut task = new_task();
    let task_id = task.id();

    let result = task.change_status(TaskStatus::Done, &clock);
    assert_eq!(
        result,
        Err(WorkDomainError::InvalidStateTransition {
            task_id,
            from: TaskStatus::New,
            to: TaskStatus::Done,
        })
    );
}

#[rstest]
fn block_is_idempotent_on_open_tasks() {
    let clock = DefaultClock;
    let mut task = new_task();
    task.block(&clock).expect("new tasks may block");
    task.block(&clock).expect("blocked tasks stay blocked");
    assert_eq!(task.status(), TaskStatus::Blocked);

    task.start(&clock).expect("blocked tasks may resume");
    assert_eq!(task.status(), TaskStatus::InProgress);
}

#[rstest]
fn block_refuses_finalized_tasks() {
    let clock = DefaultClock;
    let mut task = new_task();
    let task_id = task.id();
    task.cancel(&clock).expect("new tasks may be cancelled");

    assert_eq!(
        task.block(&clock),
        Err(WorkDomainError::TaskFinalized(task_id))
    );
}

#[rstest]
fn cancel_is_permitted_from_any_non_done_state() {
    let clock = DefaultClock;

    let mut fresh = new_task();
    fresh.cancel(&clock).expect("new tasks may be cancelled");
    assert_eq!(fresh.status(), TaskStatus::Cancelled);

    let mut blocked = new_task();
    blocked.block(&clock).expect("new tasks may block");
    blocked.cancel(&clock).expect("blocked tasks may be cancelled");

    let mut cancelled = new_task();
    cancelled.cancel(&clock).expect("new tasks may be cancelled");
    cancelled
        .cancel(&clock)
        .expect("cancelling twice stays cancelled");
}

#[rstest]
fn cancel_refuses_done_tasks() {
    let clock = DefaultClock;
    let mut task = new_task();
    let task_id = task.id();
    task.start(&clock).expect("new tasks may start");
    task.complete(0, date(2025, 1, 9), &clock)
        .expect("in-progress tasks may complete");

    assert_eq!(
        task.cancel(&clock),
        Err(WorkDomainError::TaskFinalized(task_id))
    );
}

// ── completion ─────────────────────────────────────────────────────

#[rstest]
fn effort_then_completion_accumulates_hours() {
    let clock = DefaultClock;
    let mut task = new_task();
    task.start(&clock).expect("new tasks may start");
    assert_eq!(task.status(), TaskStatus::InProgress);

    task.log_effort(5, &clock).expect("positive hours");
    assert_eq!(task.actual_hours(), 5);

    task.complete(3, date(2025, 1, 9), &clock)
        .expect("in-progress tasks may complete");
    assert_eq!(task.actual_hours(), 8);
    assert_eq!(task.status(), TaskStatus::Done);
    assert_eq!(task.completed_on(), Some(date(2025, 1, 9)));
}

#[rstest]
fn completing_twice_fails_on_the_terminal_state() {
    let clock = DefaultClock;
    let mut task = new_task();
    let task_id = task.id();
    task.start(&clock).expect("new tasks may start");
    task.complete(3, date(2025, 1, 9), &clock)
        .expect("first completion");

    let result = task.complete(1, date(2025, 1, 10), &clock);
    assert_eq!(
        result,
        Err(WorkDomainError::InvalidStateTransition {
            task_id,
            from: TaskStatus::Done,
            to: TaskStatus::Done,
        })
    );
}

#[rstest]
fn completion_date_cannot_precede_the_start() {
    let clock = DefaultClock;
    let mut task = new_task();
    task.start(&clock).expect("new tasks may start");

    let result = task.complete(3, date(2024, 12, 31), &clock);
    assert_eq!(
        result,
        Err(WorkDomainError::CompletionBeforeStart {
            start: date(2025, 1, 1),
            completed_on: date(2024, 12, 31),
        })
    );
    assert_eq!(task.status(), TaskStatus::InProgress);
    assert_eq!(task.completed_on(), None);
}

#[rstest]
fn blocked_tasks_may_complete_when_work_was_done() {
    let clock = DefaultClock;
    let mut task = new_task();
    task.start(&clock).expect("new tasks may start");
    task.block(&clock).expect("in-progress tasks may block");

    task.complete(2, date(2025, 1, 9), &clock)
        .expect("blocked tasks may complete");
    assert_eq!(task.status(), TaskStatus::Done);
}

#[rstest]
fn new_tasks_cannot_complete_directly() {
    let clock = DefaultClock;
    let mut task = new_task();
    let result = task.complete(3, date(2025, 1, 9), &clock);
    assert!(matches!(
        result,
        Err(WorkDomainError::InvalidStateTransition { .. })
    ));
}

// ── other mutations ────────────────────────────────────────────────

#[rstest]
fn log_effort_rejects_zero_hours() {
    let clock = DefaultClock;
    let mut task = new_task();
    assert_eq!(
        task.log_effort(0, &clock),
        Err(WorkDomainError::ZeroEffortHours)
    );
}

#[rstest]
fn finalized_tasks_reject_every_mutation() {
    let clock = DefaultClock;
    let mut task = new_task();
    let task_id = task.id();
    task.start(&clock).expect("new tasks may start");
    task.complete(3, date(2025, 1, 9), &clock)
        .expect("in-progress tasks may complete");

    let finalized = Err(WorkDomainError::TaskFinalized(task_id));
    assert_eq!(task.replan(date(2025, 2, 1), date(2025, 2, 10), &clock), finalized);
    assert_eq!(task.assign(None, &clock), finalized);
    assert_eq!(task.set_priority(Priority::High, &clock), finalized);
    assert_eq!(task.rename("Other", &clock), finalized);
    assert_eq!(task.change_description("x", &clock), finalized);
    assert_eq!(task.set_estimate(10, &clock), finalized);
    assert_eq!(task.log_effort(1, &clock), finalized);
}

#[rstest]
fn assign_accepts_none_to_unassign() {
    let clock = DefaultClock;
    let mut task = new_task();
    let user = super::contributor("ana");
    task.assign(Some(user.id()), &clock).expect("open task");
    assert_eq!(task.assignee(), Some(user.id()));
    task.assign(None, &clock).expect("open task");
    assert_eq!(task.assignee(), None);
}

#[rstest]
fn replan_validates_date_ordering() {
    let clock = DefaultClock;
    let mut task = new_task();
    task.replan(date(2025, 2, 1), date(2025, 2, 10), &clock)
        .expect("ordered dates");
    assert_eq!(task.start_date(), date(2025, 2, 1));

    let result = task.replan(date(2025, 3, 1), date(2025, 2, 10), &clock);
    assert!(matches!(
        result,
        Err(WorkDomainError::EndBeforeStart { .. })
    ));
}

// ── overdue detection ──────────────────────────────────────────────

#[rstest]
#[case(date(2025, 1, 10), false)]
#[case(date(2025, 1, 11), true)]
fn open_tasks_are_overdue_only_past_the_expected_end(
    #[case] reference: chrono::NaiveDate,
    #[case] expected: bool,
) {
    let task = new_task();
    assert_eq!(task.is_overdue(reference), expected);
}

#[rstest]
fn terminal_tasks_are_never_overdue() {
    let clock = DefaultClock;
    let mut task = new_task();
    task.cancel(&clock).expect("new tasks may be cancelled");
    assert!(!task.is_overdue(date(2030, 1, 1)));
}
