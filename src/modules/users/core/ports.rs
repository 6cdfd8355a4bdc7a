// Ports describe what the create_user use case needs from the outside world.
//
// - UserStore validates and persists new users.
// - Authorization decides which input keys a subject may set and which fields it may read.
// - Activation sends the activation e-mail for a freshly created account.
//
// Adapters in `adapters::outbound` implement these traits; tests substitute their own.

use async_trait::async_trait;
use serde_json::Value as Json;
use thiserror::Error;

use crate::modules::users::core::user::{PublicUser, UserInput, UserRecord};

/// Coarse classification of a user store failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    DuplicateEmail,
    DuplicateUsername,
    InvalidInput,
    Infrastructure,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserStoreError {
    #[error("email already in use")]
    DuplicateEmail,

    #[error("username already in use")]
    DuplicateUsername,

    #[error("invalid {key}: {message}")]
    Invalid { key: &'static str, message: String },

    #[error("backend error: {0}")]
    Backend(String),
}

impl UserStoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            UserStoreError::DuplicateEmail => ErrorKind::DuplicateEmail,
            UserStoreError::DuplicateUsername => ErrorKind::DuplicateUsername,
            UserStoreError::Invalid { .. } => ErrorKind::InvalidInput,
            UserStoreError::Backend(_) => ErrorKind::Infrastructure,
        }
    }

    /// The input field a validation failure refers to. Infrastructure errors have none.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            UserStoreError::DuplicateEmail => Some("email"),
            UserStoreError::DuplicateUsername => Some("username"),
            UserStoreError::Invalid { key, .. } => Some(*key),
            UserStoreError::Backend(_) => None,
        }
    }
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create(&self, input: UserInput) -> Result<UserRecord, UserStoreError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CreateUser,
    ReadUser,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::CreateUser => "create:user",
            Action::ReadUser => "read:user",
        }
    }
}

/// `subject` is the id of the session user performing the action, if any.
pub trait Authorization: Send + Sync {
    fn filter_input(&self, subject: Option<&str>, action: Action, raw: &Json) -> UserInput;
    fn filter_output(
        &self,
        subject: Option<&str>,
        action: Action,
        user: &UserRecord,
    ) -> PublicUser;
}

#[derive(Debug, Error)]
pub enum ActivationError {
    #[error("activation already requested for user {user}")]
    Duplicate { user: String },

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait Activation: Send + Sync {
    async fn create_and_send_activation_email(
        &self,
        user: &UserRecord,
    ) -> Result<(), ActivationError>;
}
