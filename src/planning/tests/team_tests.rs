//! Unit tests for the team aggregate and team roles.

use super::user_with_role;
use crate::identity::domain::Role;
use crate::planning::domain::{ParseTeamRoleError, PlanningDomainError, Team, TeamRole};
use mockable::DefaultClock;
use rstest::rstest;

#[rstest]
fn create_builds_an_empty_team() {
    let clock = DefaultClock;
    let team = Team::create("  Platform  ", " Core infrastructure ", &clock).expect("valid name");
    assert_eq!(team.name(), "Platform");
    assert_eq!(team.description(), "Core infrastructure");
    assert_eq!(team.member_count(), 0);
}

#[rstest]
fn blank_name_is_rejected() {
    let clock = DefaultClock;
    assert_eq!(
        Team::create("   ", "", &clock),
        Err(PlanningDomainError::Required("name"))
    );
}

#[rstest]
fn members_keep_insertion_order_without_duplicates() {
    let clock = DefaultClock;
    let mut team = Team::create("Platform", "", &clock).expect("valid name");
    let first = user_with_role("ana", Role::Contributor);
    let second = user_with_role("bruno", Role::Contributor);

    team.add_member(&first, &clock).expect("new member");
    team.add_member(&second, &clock).expect("new member");
    assert_eq!(team.members(), [first.id(), second.id()]);

    let result = team.add_member(&first, &clock);
    assert_eq!(
        result,
        Err(PlanningDomainError::AlreadyMember("ana".to_owned()))
    );
    assert_eq!(team.member_count(), 2);
}

#[rstest]
fn remove_member_reports_presence() {
    let clock = DefaultClock;
    let mut team = Team::create("Platform", "", &clock).expect("valid name");
    let member = user_with_role("ana", Role::Contributor);
    team.add_member(&member, &clock).expect("new member");

    assert!(team.remove_member(member.id(), &clock));
    assert!(!team.contains(member.id()));
    assert!(!team.remove_member(member.id(), &clock));
}

#[rstest]
fn removed_members_can_rejoin() {
    let clock = DefaultClock;
    let mut team = Team::create("Platform", "", &clock).expect("valid name");
    let member = user_with_role("ana", Role::Contributor);
    team.add_member(&member, &clock).expect("new member");
    team.remove_member(member.id(), &clock);
    team.add_member(&member, &clock).expect("membership cleared");
    assert!(team.contains(member.id()));
}

// ── team roles ─────────────────────────────────────────────────────

#[rstest]
#[case("dev", TeamRole::Developer)]
#[case("Developer", TeamRole::Developer)]
#[case("systems analyst", TeamRole::Analyst)]
#[case("UI/UX", TeamRole::Designer)]
#[case("tester", TeamRole::Qa)]
#[case("quality assurance", TeamRole::Qa)]
fn team_role_aliases_parse_to_canonical_variants(#[case] input: &str, #[case] expected: TeamRole) {
    assert_eq!(TeamRole::try_from(input), Ok(expected));
}

#[rstest]
fn unknown_team_role_is_rejected() {
    assert_eq!(
        TeamRole::try_from("scrum master"),
        Err(ParseTeamRoleError("scrum master".to_owned()))
    );
}

#[rstest]
fn team_role_labels_are_presentable() {
    assert_eq!(TeamRole::Qa.label(), "Quality analyst (QA)");
    assert_eq!(TeamRole::Analyst.label(), "Systems analyst");
}
