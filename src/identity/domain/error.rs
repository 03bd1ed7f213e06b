//! Error types for identity domain validation and parsing.

use thiserror::Error;

/// Errors returned while validating a Brazilian CPF tax id.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CpfError {
    /// The input does not normalise to 11 non-repeated digits.
    #[error("tax id must contain 11 digits and not be a repeated sequence")]
    InvalidFormat,

    /// One of the two verification digits does not match the weighted sum.
    #[error("tax id verification digits do not match")]
    InvalidChecksum,
}

/// Errors returned while validating an e-mail address.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    /// The address is empty after trimming.
    #[error("e-mail address must not be empty")]
    Required,

    /// The normalised address does not match the accepted pattern.
    #[error("e-mail address '{0}' is malformed")]
    InvalidFormat(String),
}

/// Errors returned while constructing identity domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityDomainError {
    /// A mandatory field is missing or blank after trimming.
    #[error("required field not provided: {0}")]
    Required(&'static str),

    /// The login is shorter than the three-character minimum.
    #[error("login must have at least 3 characters")]
    LoginTooShort,

    /// The password is shorter than the six-character minimum.
    #[error("password must have at least 6 characters")]
    PasswordTooShort,

    /// The current password presented for a password change does not verify.
    #[error("current password does not match")]
    PasswordMismatch,

    /// Tax id validation failed.
    #[error(transparent)]
    Cpf(#[from] CpfError),

    /// E-mail validation failed.
    #[error(transparent)]
    Email(#[from] EmailError),
}

/// Error returned while parsing an access role from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown access role: {0}")]
pub struct ParseRoleError(pub String);
