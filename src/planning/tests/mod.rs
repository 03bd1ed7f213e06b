//! Unit tests for the planning context.

mod status_tests;
mod team_tests;

use crate::identity::domain::{Cpf, EmailAddress, Role, User, UserDraft};
use chrono::NaiveDate;
use mockable::DefaultClock;

/// Builds a user with the given role for planning scenarios.
pub(crate) fn user_with_role(login: &str, role: Role) -> User {
    let clock = DefaultClock;
    User::create(
        UserDraft {
            full_name: "Ana Souza".to_owned(),
            cpf: Cpf::parse("529.982.247-25").expect("valid tax id"),
            email: EmailAddress::parse("ana.souza@example.com").expect("valid address"),
            title: "Engineering Manager".to_owned(),
            login: login.to_owned(),
            password: "s3cret!".to_owned(),
            role,
        },
        &clock,
    )
    .expect("valid draft")
}

/// Shorthand for literal calendar dates in test cases.
pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}
