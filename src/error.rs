//! Error types for Registrar
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::StoreError;
use crate::domain::value_objects::{CourseCode, UserId};

/// Result type alias for Registrar operations
pub type RegistrarResult<T> = Result<T, RegistrarError>;

/// Main error type for Registrar operations
#[derive(Error, Debug)]
pub enum RegistrarError {
    /// No user with this id exists
    #[error("user {id} not found")]
    UserNotFound { id: UserId },

    /// Course code does not resolve (or is not visible to the caller)
    #[error("course '{code}' not found")]
    CourseNotFound { code: CourseCode },

    /// Assignment number out of range for the course
    #[error("assignment #{number} not found in course '{code}'")]
    AssignmentNotFound { code: CourseCode, number: usize },

    /// Username already taken at sign-up
    #[error("username '{username}' already exists")]
    UsernameTaken { username: String },

    /// Course code already used by some instructor
    #[error("course code '{code}' already exists")]
    CourseCodeTaken { code: CourseCode },

    /// Email does not match the address pattern
    #[error("invalid email format: '{email}'")]
    InvalidEmail { email: String },

    /// Every id after the largest stored one is taken
    #[error("no user id left after {last}")]
    IdSpaceExhausted { last: UserId },

    /// Sign-in failed. Never says which half was wrong.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Operation requires a different role
    #[error("user {id} is not {expected}")]
    RoleMismatch { id: UserId, expected: &'static str },

    /// Learner already registered in the course
    #[error("user {learner} is already registered in '{code}'")]
    AlreadyRegistered { learner: UserId, code: CourseCode },

    /// Learner is not registered in the course
    #[error("user {learner} is not registered in '{code}'")]
    NotRegistered { learner: UserId, code: CourseCode },

    /// Persistence failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Malformed configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RegistrarError {
    /// True for the "does not resolve" family the caller should present as not found
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound { .. } | Self::CourseNotFound { .. } | Self::AssignmentNotFound { .. }
        )
    }
}
