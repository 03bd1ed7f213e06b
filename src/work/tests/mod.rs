//! Unit tests for the work context.

mod effort_tests;
mod reporting_tests;
mod service_tests;
mod task_tests;

use crate::identity::domain::{Cpf, EmailAddress, Role, User, UserDraft};
use crate::planning::domain::{Project, ProjectDraft};
use crate::work::domain::{Task, TaskDraft};
use chrono::NaiveDate;
use mockable::DefaultClock;

/// Builds a contributor for work scenarios.
pub(crate) fn contributor(login: &str) -> User {
    let clock = DefaultClock;
    User::create(
        UserDraft {
            full_name: "Ana Souza".to_owned(),
            cpf: Cpf::parse("529.982.247-25").expect("valid tax id"),
            email: EmailAddress::parse("ana.souza@example.com").expect("valid address"),
            title: "Software Engineer".to_owned(),
            login: login.to_owned(),
            password: "s3cret!".to_owned(),
            role: Role::Contributor,
        },
        &clock,
    )
    .expect("valid draft")
}

/// Builds a planned project for work scenarios.
pub(crate) fn project() -> Project {
    let clock = DefaultClock;
    let manager = User::create(
        UserDraft {
            full_name: "Bruno Lima".to_owned(),
            cpf: Cpf::parse("111.444.777-35").expect("valid tax id"),
            email: EmailAddress::parse("bruno.lima@example.com").expect("valid address"),
            title: "Engineering Manager".to_owned(),
            login: "blima".to_owned(),
            password: "s3cret!".to_owned(),
            role: Role::Manager,
        },
        &clock,
    )
    .expect("valid draft");
    Project::create(
        ProjectDraft {
            name: "Billing revamp".to_owned(),
            description: "Replace the legacy invoicing pipeline".to_owned(),
            start_date: date(2025, 1, 1),
            expected_end: date(2025, 6, 30),
        },
        &manager,
        &clock,
    )
    .expect("valid draft")
}

/// Builds a fresh task on the fixture project: start 2025-01-01, expected
/// end 2025-01-10, eight estimated hours.
pub(crate) fn new_task() -> Task {
    let clock = DefaultClock;
    let draft = TaskDraft::new(
        &project(),
        "Wire up invoice totals",
        date(2025, 1, 1),
        date(2025, 1, 10),
    )
    .with_estimate(8);
    Task::create(draft, &clock).expect("valid draft")
}

/// Shorthand for literal calendar dates in test cases.
pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}
