//! Service layer for user registration and account maintenance.
//!
//! Provides [`UserDirectoryService`] which coordinates registration,
//! lookup, credential checks, and profile updates over a
//! [`UserRepository`].

use crate::identity::{
    domain::{Cpf, EmailAddress, IdentityDomainError, Role, User, UserDraft, UserId},
    ports::{UserRepository, UserRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for registering a new user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUserRequest {
    full_name: String,
    tax_id: String,
    email: String,
    title: String,
    login: String,
    password: String,
    role: Role,
}

impl RegisterUserRequest {
    /// Creates a request with all registration fields.
    #[expect(
        clippy::too_many_arguments,
        reason = "registration bundles all mandatory fields for a single domain aggregate"
    )]
    #[must_use]
    pub fn new(
        full_name: impl Into<String>,
        tax_id: impl Into<String>,
        email: impl Into<String>,
        title: impl Into<String>,
        login: impl Into<String>,
        password: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            tax_id: tax_id.into(),
            email: email.into(),
            title: title.into(),
            login: login.into(),
            password: password.into(),
            role,
        }
    }
}

/// Service-level errors for user directory operations.
#[derive(Debug, Error)]
pub enum UserDirectoryServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] IdentityDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
}

/// Result type for user directory service operations.
pub type UserDirectoryServiceResult<T> = Result<T, UserDirectoryServiceError>;

/// User registration and account maintenance service.
#[derive(Clone)]
pub struct UserDirectoryService<R, C>
where
    R: UserRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> UserDirectoryService<R, C>
where
    R: UserRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new user directory service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Registers a new user, enforcing login uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryServiceError::Domain`] when a field fails
    /// validation and [`UserDirectoryServiceError::Repository`] when the
    /// login is already taken or persistence fails.
    pub fn register(&self, request: RegisterUserRequest) -> UserDirectoryServiceResult<User> {
        let RegisterUserRequest {
            full_name,
            tax_id,
            email,
            title,
            login,
            password,
            role,
        } = request;

        let cpf = Cpf::parse(&tax_id).map_err(IdentityDomainError::from)?;
        let address = EmailAddress::parse(&email).map_err(IdentityDomainError::from)?;
        let user = User::create(
            UserDraft {
                full_name,
                cpf,
                email: address,
                title,
                login,
                password,
                role,
            },
            &*self.clock,
        )?;
        self.repository.add(&user)?;
        Ok(user)
    }

    /// Finds a user by identifier.
    ///
    /// Returns `Ok(None)` when no user has the given id.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryServiceError::Repository`] when the lookup
    /// fails.
    pub fn find_by_id(&self, id: UserId) -> UserDirectoryServiceResult<Option<User>> {
        Ok(self.repository.find_by_id(id)?)
    }

    /// Finds a user by unique login.
    ///
    /// Returns `Ok(None)` when no user has the given login.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryServiceError::Repository`] when the lookup
    /// fails.
    pub fn find_by_login(&self, login: &str) -> UserDirectoryServiceResult<Option<User>> {
        Ok(self.repository.find_by_login(login)?)
    }

    /// Returns all registered users.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryServiceError::Repository`] when the lookup
    /// fails.
    pub fn list_all(&self) -> UserDirectoryServiceResult<Vec<User>> {
        Ok(self.repository.list_all()?)
    }

    /// Replaces a user's e-mail address.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryServiceError::Domain`] when the address fails
    /// validation and [`UserDirectoryServiceError::Repository`] when the
    /// user is not found or persistence fails.
    pub fn change_email(&self, id: UserId, new_email: &str) -> UserDirectoryServiceResult<User> {
        let mut user = self.find_by_id_or_error(id)?;
        let address = EmailAddress::parse(new_email).map_err(IdentityDomainError::from)?;
        user.change_email(address, &*self.clock);
        self.repository.update(&user)?;
        Ok(user)
    }

    /// Replaces a user's access role.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryServiceError::Repository`] when the user is
    /// not found or persistence fails.
    pub fn change_role(&self, id: UserId, role: Role) -> UserDirectoryServiceResult<User> {
        let mut user = self.find_by_id_or_error(id)?;
        user.change_role(role, &*self.clock);
        self.repository.update(&user)?;
        Ok(user)
    }

    /// Replaces a user's password after verifying the current one.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryServiceError::Domain`] when the current
    /// password does not verify or the replacement is too short, and
    /// [`UserDirectoryServiceError::Repository`] when the user is not found
    /// or persistence fails.
    pub fn change_password(
        &self,
        id: UserId,
        current: &str,
        new_password: &str,
    ) -> UserDirectoryServiceResult<User> {
        let mut user = self.find_by_id_or_error(id)?;
        user.change_password(current, new_password, &*self.clock)?;
        self.repository.update(&user)?;
        Ok(user)
    }

    /// Checks a login/password pair.
    ///
    /// Returns the matching user when the credentials verify, `Ok(None)`
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryServiceError::Repository`] when the lookup
    /// fails.
    pub fn authenticate(
        &self,
        login: &str,
        password: &str,
    ) -> UserDirectoryServiceResult<Option<User>> {
        let candidate = self.repository.find_by_login(login)?;
        Ok(candidate.filter(|user| user.verify_password(password)))
    }

    fn find_by_id_or_error(&self, id: UserId) -> UserDirectoryServiceResult<User> {
        self.repository
            .find_by_id(id)?
            .ok_or_else(|| UserRepositoryError::NotFound(id).into())
    }
}
