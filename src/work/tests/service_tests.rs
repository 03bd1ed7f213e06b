//! Service orchestration tests for task tracking.

use std::sync::Arc;

use super::{contributor, date, project};
use crate::work::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Priority, TaskId, TaskStatus, WorkDomainError},
    ports::TaskRepositoryError,
    services::{CreateTaskRequest, TrackingService, TrackingServiceError},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = TrackingService<InMemoryTaskRepository, DefaultClock>;

#[fixture]
fn service() -> TestService {
    TrackingService::new(Arc::new(InMemoryTaskRepository::new()), Arc::new(DefaultClock))
}

fn request() -> CreateTaskRequest {
    CreateTaskRequest::new(
        "Wire up invoice totals".to_owned(),
        date(2025, 1, 1),
        date(2025, 1, 10),
    )
    .with_estimate(8)
}

#[rstest]
fn create_task_persists_under_the_project(service: TestService) {
    let owner = project();
    let task = service
        .create_task(&owner, request().with_priority(Priority::High))
        .expect("valid request");

    assert_eq!(task.priority(), Priority::High);
    let listed = service
        .list_project_tasks(owner.id())
        .expect("lookup succeeds");
    assert_eq!(listed.len(), 1);
}

#[rstest]
fn lifecycle_scenario_accumulates_effort_and_completes(service: TestService) {
    let owner = project();
    let user = contributor("ana");
    let task = service.create_task(&owner, request()).expect("valid request");
    assert_eq!(task.status(), TaskStatus::New);

    service.start_task(task.id()).expect("new tasks may start");

    let entry = service
        .log_effort(task.id(), &user, date(2025, 1, 5), 5, "")
        .expect("positive hours after start");
    assert_eq!(entry.hours(), 5);

    let after_effort = service
        .find_task(task.id())
        .expect("lookup succeeds")
        .expect("task exists");
    assert_eq!(after_effort.actual_hours(), 5);

    let completed = service
        .complete_task(task.id(), 3, date(2025, 1, 9))
        .expect("in-progress tasks may complete");
    assert_eq!(completed.actual_hours(), 8);
    assert_eq!(completed.status(), TaskStatus::Done);
    assert_eq!(completed.completed_on(), Some(date(2025, 1, 9)));
}

#[rstest]
fn log_effort_rejects_dates_before_the_task_start(service: TestService) {
    let owner = project();
    let user = contributor("ana");
    let task = service.create_task(&owner, request()).expect("valid request");

    let result = service.log_effort(task.id(), &user, date(2024, 12, 31), 2, "");
    assert!(matches!(
        result,
        Err(TrackingServiceError::Domain(
            WorkDomainError::EffortBeforeTaskStart { .. }
        ))
    ));

    let untouched = service
        .find_task(task.id())
        .expect("lookup succeeds")
        .expect("task exists");
    assert_eq!(untouched.actual_hours(), 0);
}

#[rstest]
fn completing_twice_fails_on_the_terminal_state(service: TestService) {
    let owner = project();
    let task = service.create_task(&owner, request()).expect("valid request");
    service.start_task(task.id()).expect("new tasks may start");
    service
        .complete_task(task.id(), 3, date(2025, 1, 9))
        .expect("first completion");

    let result = service.complete_task(task.id(), 1, date(2025, 1, 10));
    assert!(matches!(
        result,
        Err(TrackingServiceError::Domain(
            WorkDomainError::InvalidStateTransition { .. }
        ))
    ));
}

#[rstest]
fn block_and_cancel_persist_their_status(service: TestService) {
    let owner = project();
    let task = service.create_task(&owner, request()).expect("valid request");

    service.block_task(task.id()).expect("new tasks may block");
    let blocked = service
        .find_task(task.id())
        .expect("lookup succeeds")
        .expect("task exists");
    assert_eq!(blocked.status(), TaskStatus::Blocked);

    service
        .cancel_task(task.id())
        .expect("blocked tasks may be cancelled");
    let cancelled = service
        .find_task(task.id())
        .expect("lookup succeeds")
        .expect("task exists");
    assert_eq!(cancelled.status(), TaskStatus::Cancelled);
}

#[rstest]
fn assign_task_round_trips_through_the_repository(service: TestService) {
    let owner = project();
    let user = contributor("ana");
    let task = service.create_task(&owner, request()).expect("valid request");

    service
        .assign_task(task.id(), Some(&user))
        .expect("open task");
    let assigned = service
        .find_task(task.id())
        .expect("lookup succeeds")
        .expect("task exists");
    assert_eq!(assigned.assignee(), Some(user.id()));

    service.assign_task(task.id(), None).expect("open task");
    let unassigned = service
        .find_task(task.id())
        .expect("lookup succeeds")
        .expect("task exists");
    assert_eq!(unassigned.assignee(), None);
}

#[rstest]
fn comment_now_stamps_the_clock(service: TestService) {
    let owner = project();
    let user = contributor("ana");
    let task = service.create_task(&owner, request()).expect("valid request");

    let note = service
        .comment_now(task.id(), &user, "kicking this off")
        .expect("valid message");
    assert_eq!(note.task_id(), task.id());
    assert_eq!(note.message(), "kicking this off");
}

#[rstest]
fn operations_on_unknown_tasks_report_not_found(service: TestService) {
    let missing = TaskId::new();
    let result = service.start_task(missing);
    assert!(matches!(
        result,
        Err(TrackingServiceError::Repository(
            TaskRepositoryError::NotFound(id)
        )) if id == missing
    ));
}
