use crate::modules::users::core::ports::{ErrorKind, UserStoreError};
use crate::modules::users::core::user::CreatedUser;

/// What the handler does with a failed creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureHandling {
    /// Answer as if the account had been created.
    MaskAsCreated,
    Propagate,
}

pub fn classify(error: &UserStoreError) -> FailureHandling {
    match error.kind() {
        ErrorKind::DuplicateEmail => FailureHandling::MaskAsCreated,
        ErrorKind::DuplicateUsername | ErrorKind::InvalidInput | ErrorKind::Infrastructure => {
            FailureHandling::Propagate
        }
    }
}

/// Both outcomes are answered with 201 and an identically shaped payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created(CreatedUser),
    MaskedDuplicateEmail(CreatedUser),
}

impl Outcome {
    pub fn payload(&self) -> &CreatedUser {
        match self {
            Outcome::Created(payload) | Outcome::MaskedDuplicateEmail(payload) => payload,
        }
    }

    pub fn into_payload(self) -> CreatedUser {
        match self {
            Outcome::Created(payload) | Outcome::MaskedDuplicateEmail(payload) => payload,
        }
    }
}
