//! Team aggregate root.

use super::{PlanningDomainError, TeamId};
use crate::identity::domain::{User, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Team aggregate root.
///
/// Keeps an ordered membership list with no duplicate members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    id: TeamId,
    name: String,
    description: String,
    members: Vec<UserId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Team {
    /// Creates an empty team.
    ///
    /// The description is optional and stored trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningDomainError::Required`] when the name is blank.
    pub fn create(
        name: &str,
        description: &str,
        clock: &impl Clock,
    ) -> Result<Self, PlanningDomainError> {
        let trimmed_name = name.trim();
        if trimmed_name.is_empty() {
            return Err(PlanningDomainError::Required("name"));
        }
        let timestamp = clock.utc();
        Ok(Self {
            id: TeamId::new(),
            name: trimmed_name.to_owned(),
            description: description.trim().to_owned(),
            members: Vec::new(),
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Returns the team identifier.
    #[must_use]
    pub const fn id(&self) -> TeamId {
        self.id
    }

    /// Returns the team name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the team description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the members in insertion order.
    #[must_use]
    pub fn members(&self) -> &[UserId] {
        &self.members
    }

    /// Returns the number of members.
    #[must_use]
    pub const fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` when the user belongs to the team.
    #[must_use]
    pub fn contains(&self, member: UserId) -> bool {
        self.members.contains(&member)
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Renames the team.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningDomainError::Required`] when the name is blank.
    pub fn rename(&mut self, name: &str, clock: &impl Clock) -> Result<(), PlanningDomainError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(PlanningDomainError::Required("name"));
        }
        self.name = trimmed.to_owned();
        self.touch(clock);
        Ok(())
    }

    /// Replaces the description; an empty value clears it.
    pub fn change_description(&mut self, description: &str, clock: &impl Clock) {
        self.description = description.trim().to_owned();
        self.touch(clock);
    }

    /// Adds a member, rejecting duplicates by identity.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningDomainError::AlreadyMember`] when the user already
    /// belongs to the team.
    pub fn add_member(
        &mut self,
        user: &User,
        clock: &impl Clock,
    ) -> Result<(), PlanningDomainError> {
        if self.members.contains(&user.id()) {
            return Err(PlanningDomainError::AlreadyMember(user.login().to_owned()));
        }
        self.members.push(user.id());
        self.touch(clock);
        Ok(())
    }

    /// Removes a member; returns whether the user was present.
    pub fn remove_member(&mut self, member: UserId, clock: &impl Clock) -> bool {
        let before = self.members.len();
        self.members.retain(|id| *id != member);
        let removed = self.members.len() != before;
        if removed {
            self.touch(clock);
        }
        removed
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
