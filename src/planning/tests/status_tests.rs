//! Unit tests for the project status transition table.

use crate::planning::domain::{ParseProjectStatusError, ProjectStatus};
use rstest::rstest;

#[rstest]
#[case(ProjectStatus::Planned, ProjectStatus::Planned, false)]
#[case(ProjectStatus::Planned, ProjectStatus::InProgress, true)]
#[case(ProjectStatus::Planned, ProjectStatus::Done, false)]
#[case(ProjectStatus::Planned, ProjectStatus::Cancelled, true)]
#[case(ProjectStatus::InProgress, ProjectStatus::Planned, false)]
#[case(ProjectStatus::InProgress, ProjectStatus::InProgress, false)]
#[case(ProjectStatus::InProgress, ProjectStatus::Done, true)]
#[case(ProjectStatus::InProgress, ProjectStatus::Cancelled, true)]
#[case(ProjectStatus::Done, ProjectStatus::Planned, false)]
#[case(ProjectStatus::Done, ProjectStatus::InProgress, false)]
#[case(ProjectStatus::Done, ProjectStatus::Done, false)]
#[case(ProjectStatus::Done, ProjectStatus::Cancelled, false)]
#[case(ProjectStatus::Cancelled, ProjectStatus::Planned, false)]
#[case(ProjectStatus::Cancelled, ProjectStatus::InProgress, false)]
#[case(ProjectStatus::Cancelled, ProjectStatus::Done, false)]
#[case(ProjectStatus::Cancelled, ProjectStatus::Cancelled, false)]
fn can_transition_to_returns_expected(
    #[case] from: ProjectStatus,
    #[case] to: ProjectStatus,
    #[case] expected: bool,
) {
    assert_eq!(from.can_transition_to(to), expected);
}

#[rstest]
#[case(ProjectStatus::Planned, false)]
#[case(ProjectStatus::InProgress, false)]
#[case(ProjectStatus::Done, true)]
#[case(ProjectStatus::Cancelled, true)]
fn is_terminal_returns_expected(#[case] status: ProjectStatus, #[case] expected: bool) {
    assert_eq!(status.is_terminal(), expected);
}

#[rstest]
#[case(ProjectStatus::Planned, "planned")]
#[case(ProjectStatus::InProgress, "in_progress")]
#[case(ProjectStatus::Done, "done")]
#[case(ProjectStatus::Cancelled, "cancelled")]
fn as_str_round_trips(#[case] status: ProjectStatus, #[case] expected: &str) {
    assert_eq!(status.as_str(), expected);
    let parsed = ProjectStatus::try_from(expected).expect("canonical form parses");
    assert_eq!(parsed, status);
}

#[rstest]
#[case("in progress", ProjectStatus::InProgress)]
#[case("ONGOING", ProjectStatus::InProgress)]
#[case("completed", ProjectStatus::Done)]
#[case("canceled", ProjectStatus::Cancelled)]
fn aliases_parse_to_canonical_variants(#[case] input: &str, #[case] expected: ProjectStatus) {
    assert_eq!(ProjectStatus::try_from(input), Ok(expected));
}

#[rstest]
fn unknown_status_is_rejected() {
    assert_eq!(
        ProjectStatus::try_from("archived"),
        Err(ParseProjectStatusError("archived".to_owned()))
    );
}
