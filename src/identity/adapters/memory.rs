//! In-memory user directory adapter.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::identity::{
    domain::{User, UserId},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};

/// Thread-safe in-memory user store with a login uniqueness index.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserDirectory {
    state: Arc<RwLock<DirectoryState>>,
}

#[derive(Debug, Default)]
struct DirectoryState {
    users: HashMap<UserId, User>,
    login_index: HashMap<String, UserId>,
}

impl InMemoryUserDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserDirectory {
    fn add(&self, user: &User) -> UserRepositoryResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| UserRepositoryError::storage(std::io::Error::other(err.to_string())))?;

        if state.users.contains_key(&user.id()) {
            return Err(UserRepositoryError::DuplicateUser(user.id()));
        }
        if state.login_index.contains_key(user.login()) {
            return Err(UserRepositoryError::DuplicateLogin(user.login().to_owned()));
        }

        state.login_index.insert(user.login().to_owned(), user.id());
        state.users.insert(user.id(), user.clone());
        Ok(())
    }

    fn update(&self, user: &User) -> UserRepositoryResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| UserRepositoryError::storage(std::io::Error::other(err.to_string())))?;

        if !state.users.contains_key(&user.id()) {
            return Err(UserRepositoryError::NotFound(user.id()));
        }
        state.users.insert(user.id(), user.clone());
        Ok(())
    }

    fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>> {
        let state = self
            .state
            .read()
            .map_err(|err| UserRepositoryError::storage(std::io::Error::other(err.to_string())))?;
        Ok(state.users.get(&id).cloned())
    }

    fn find_by_login(&self, login: &str) -> UserRepositoryResult<Option<User>> {
        let state = self
            .state
            .read()
            .map_err(|err| UserRepositoryError::storage(std::io::Error::other(err.to_string())))?;
        let user = state
            .login_index
            .get(login)
            .and_then(|id| state.users.get(id))
            .cloned();
        Ok(user)
    }

    fn list_all(&self) -> UserRepositoryResult<Vec<User>> {
        let state = self
            .state
            .read()
            .map_err(|err| UserRepositoryError::storage(std::io::Error::other(err.to_string())))?;
        Ok(state.users.values().cloned().collect())
    }
}
