//! Application services for user registration and account maintenance.

mod directory;

pub use directory::{
    RegisterUserRequest, UserDirectoryService, UserDirectoryServiceError,
    UserDirectoryServiceResult,
};
