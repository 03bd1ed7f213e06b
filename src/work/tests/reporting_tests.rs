//! Unit tests for the CSV reporting service.

use std::sync::Arc;

use super::{contributor, date, project};
use crate::identity::{adapters::memory::InMemoryUserDirectory, ports::UserRepository};
use crate::work::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Comment, EffortLogEntry, Task, TaskDraft},
    ports::TaskRepository,
    services::{ReportingError, ReportingService},
};
use chrono::{TimeZone, Utc};
use mockable::DefaultClock;
use rstest::rstest;

struct Fixture {
    service: ReportingService<InMemoryTaskRepository, InMemoryUserDirectory>,
    task: Task,
    user: crate::identity::domain::User,
}

fn fixture() -> Fixture {
    let clock = DefaultClock;
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let users = Arc::new(InMemoryUserDirectory::new());

    let task = Task::create(
        TaskDraft::new(&project(), "Totals", date(2025, 1, 1), date(2025, 1, 10)),
        &clock,
    )
    .expect("valid draft");
    tasks.add(&task).expect("fresh repository");

    let user = contributor("ana");
    users.add(&user).expect("fresh repository");

    Fixture {
        service: ReportingService::new(tasks, users),
        task,
        user,
    }
}

#[rstest]
fn effort_log_csv_renders_header_and_rows() {
    let fix = fixture();
    let entries = vec![
        EffortLogEntry::new(&fix.task, &fix.user, date(2025, 1, 2), 3, "setup")
            .expect("valid entry"),
        EffortLogEntry::new(&fix.task, &fix.user, date(2025, 1, 3), 5, "")
            .expect("valid entry"),
    ];

    let csv = fix.service.effort_log_csv(&entries).expect("known records");
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines.first(), Some(&"id;data;horas;usuario;task;obs"));

    let first_row = lines.get(1).expect("row exists");
    assert!(first_row.contains(";2025-01-02;3;ana;Totals;setup"));
}

#[rstest]
fn effort_log_csv_of_nothing_is_just_the_header() {
    let fix = fixture();
    let csv = fix.service.effort_log_csv(&[]).expect("no records");
    assert_eq!(csv, "id;data;horas;usuario;task;obs");
}

#[rstest]
fn comments_csv_flattens_separators_and_newlines() {
    let fix = fixture();
    let when = Utc
        .with_ymd_and_hms(2025, 1, 5, 10, 30, 0)
        .single()
        .expect("valid timestamp");
    let comments = vec![
        Comment::new(&fix.task, &fix.user, when, "hi").expect("valid message"),
        Comment::new(&fix.task, &fix.user, when, "a;b\nc").expect("valid message"),
    ];

    let csv = fix.service.comments_csv(&comments).expect("known records");
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), comments.len() + 1);
    assert_eq!(lines.first(), Some(&"id;dataHora;autor;task;mensagem"));

    let second_row = lines.get(2).expect("row exists");
    assert!(second_row.ends_with(";ana;Totals;a,b c"));
    assert!(second_row.contains("2025-01-05T10:30:00"));
}

#[rstest]
fn effort_note_separators_are_flattened() {
    let fix = fixture();
    let entries = vec![
        EffortLogEntry::new(&fix.task, &fix.user, date(2025, 1, 2), 3, "a;b\nc")
            .expect("valid entry"),
    ];
    let csv = fix.service.effort_log_csv(&entries).expect("known records");
    assert!(csv.ends_with(";ana;Totals;a,b c"));
}

#[rstest]
fn unknown_references_are_reported() {
    let fix = fixture();
    let clock = DefaultClock;

    let stray_task = Task::create(
        TaskDraft::new(&project(), "Elsewhere", date(2025, 1, 1), date(2025, 1, 10)),
        &clock,
    )
    .expect("valid draft");
    let entries = vec![
        EffortLogEntry::new(&stray_task, &fix.user, date(2025, 1, 2), 1, "")
            .expect("valid entry"),
    ];

    let result = fix.service.effort_log_csv(&entries);
    assert!(matches!(result, Err(ReportingError::UnknownTask(id)) if id == stray_task.id()));
}

#[rstest]
fn project_effort_csv_keeps_only_that_projects_entries() {
    let clock = DefaultClock;
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let users = Arc::new(InMemoryUserDirectory::new());

    let first_project = project();
    let second_project = project();
    let in_scope = Task::create(
        TaskDraft::new(&first_project, "Totals", date(2025, 1, 1), date(2025, 1, 10)),
        &clock,
    )
    .expect("valid draft");
    let out_of_scope = Task::create(
        TaskDraft::new(&second_project, "Other", date(2025, 1, 1), date(2025, 1, 10)),
        &clock,
    )
    .expect("valid draft");
    tasks.add(&in_scope).expect("fresh repository");
    tasks.add(&out_of_scope).expect("fresh repository");

    let user = contributor("ana");
    users.add(&user).expect("fresh repository");

    let service = ReportingService::new(tasks, users);
    let entries = vec![
        EffortLogEntry::new(&in_scope, &user, date(2025, 1, 2), 3, "").expect("valid entry"),
        EffortLogEntry::new(&out_of_scope, &user, date(2025, 1, 2), 4, "").expect("valid entry"),
    ];

    let csv = service
        .project_effort_csv(first_project.id(), &entries)
        .expect("known records");
    assert_eq!(csv.lines().count(), 2);
    assert!(csv.contains("Totals"));
    assert!(!csv.contains("Other"));
}
