//! User aggregate root.

use super::{Cpf, EmailAddress, IdentityDomainError, PasswordHash, Role, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Minimum login length accepted at registration.
const MIN_LOGIN_LENGTH: usize = 3;

/// Minimum clear-text password length accepted before hashing.
const MIN_PASSWORD_LENGTH: usize = 6;

/// Input for registering a user, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    /// Full display name.
    pub full_name: String,
    /// Validated tax id.
    pub cpf: Cpf,
    /// Validated e-mail address.
    pub email: EmailAddress,
    /// Job title.
    pub title: String,
    /// Unique login; immutable once created, it also salts the password
    /// digest.
    pub login: String,
    /// Clear-text password, hashed during construction and never stored.
    pub password: String,
    /// Access role.
    pub role: Role,
}

/// User aggregate root.
///
/// Constructed only through [`User::create`], which validates every field
/// atomically; a value of this type is always internally consistent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    full_name: String,
    cpf: Cpf,
    email: EmailAddress,
    title: String,
    login: String,
    password_hash: PasswordHash,
    role: Role,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a validated user.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityDomainError::Required`] when the name, title, or
    /// login is blank, [`IdentityDomainError::LoginTooShort`] for logins
    /// under three characters, and [`IdentityDomainError::PasswordTooShort`]
    /// for passwords under six characters.
    pub fn create(draft: UserDraft, clock: &impl Clock) -> Result<Self, IdentityDomainError> {
        let full_name = required_trimmed(&draft.full_name, "full_name")?;
        let title = required_trimmed(&draft.title, "title")?;
        let login = required_trimmed(&draft.login, "login")?;
        if login.chars().count() < MIN_LOGIN_LENGTH {
            return Err(IdentityDomainError::LoginTooShort);
        }
        if draft.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(IdentityDomainError::PasswordTooShort);
        }

        let password_hash = PasswordHash::derive(&login, &draft.password);
        let timestamp = clock.utc();
        Ok(Self {
            id: UserId::new(),
            full_name,
            cpf: draft.cpf,
            email: draft.email,
            title,
            login,
            password_hash,
            role: draft.role,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the full display name.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Returns the validated tax id.
    #[must_use]
    pub const fn cpf(&self) -> &Cpf {
        &self.cpf
    }

    /// Returns the validated e-mail address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the job title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the unique login.
    #[must_use]
    pub fn login(&self) -> &str {
        &self.login
    }

    /// Returns the access role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
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

    /// Replaces the e-mail address.
    pub fn change_email(&mut self, email: EmailAddress, clock: &impl Clock) {
        self.email = email;
        self.touch(clock);
    }

    /// Replaces the full name.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityDomainError::Required`] when the name is blank.
    pub fn rename(&mut self, full_name: &str, clock: &impl Clock) -> Result<(), IdentityDomainError> {
        self.full_name = required_trimmed(full_name, "full_name")?;
        self.touch(clock);
        Ok(())
    }

    /// Replaces the job title.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityDomainError::Required`] when the title is blank.
    pub fn change_title(&mut self, title: &str, clock: &impl Clock) -> Result<(), IdentityDomainError> {
        self.title = required_trimmed(title, "title")?;
        self.touch(clock);
        Ok(())
    }

    /// Replaces the access role.
    pub fn change_role(&mut self, role: Role, clock: &impl Clock) {
        self.role = role;
        self.touch(clock);
    }

    /// Replaces the password after verifying the current one.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityDomainError::PasswordMismatch`] when the current
    /// password does not verify and
    /// [`IdentityDomainError::PasswordTooShort`] when the replacement is
    /// under six characters.
    pub fn change_password(
        &mut self,
        current: &str,
        new_password: &str,
        clock: &impl Clock,
    ) -> Result<(), IdentityDomainError> {
        if !self.password_hash.verify(&self.login, current) {
            return Err(IdentityDomainError::PasswordMismatch);
        }
        if new_password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(IdentityDomainError::PasswordTooShort);
        }
        self.password_hash = PasswordHash::derive(&self.login, new_password);
        self.touch(clock);
        Ok(())
    }

    /// Returns `true` when the candidate password matches the stored digest.
    #[must_use]
    pub fn verify_password(&self, candidate: &str) -> bool {
        self.password_hash.verify(&self.login, candidate)
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

/// Validates a mandatory text field and returns its trimmed form.
fn required_trimmed(value: &str, field: &'static str) -> Result<String, IdentityDomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(IdentityDomainError::Required(field));
    }
    Ok(trimmed.to_owned())
}
