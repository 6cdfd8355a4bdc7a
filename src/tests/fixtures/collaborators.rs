// Hand-rolled doubles for the create_user ports.

use crate::modules::users::adapters::outbound::authorization::DefaultAuthorization;
use crate::modules::users::core::ports::{
    Action, Activation, ActivationError, Authorization, UserStore, UserStoreError,
};
use crate::modules::users::core::user::{PublicUser, UserInput, UserRecord, new_user_features};
use crate::shared::core::primitives::{IdGenerator, SequentialIds};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value as Json;
use std::sync::Arc;
use tokio::sync::Mutex;

pub fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 31, 18, 0, 0).unwrap()
}

pub fn mock_uuid_ids() -> Arc<dyn IdGenerator> {
    Arc::new(SequentialIds::new("mock-uuid"))
}

/// Answers every `create` with the same canned result.
pub struct StubUserStore {
    result: Result<Option<String>, UserStoreError>,
}

impl StubUserStore {
    pub fn creates_with_id(id: Option<&str>) -> Self {
        Self {
            result: Ok(id.map(str::to_string)),
        }
    }

    pub fn fails_with(error: UserStoreError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl UserStore for StubUserStore {
    async fn create(&self, input: UserInput) -> Result<UserRecord, UserStoreError> {
        let id = self.result.clone()?;
        Ok(UserRecord {
            id,
            username: input.username.unwrap_or_default(),
            email: input.email.unwrap_or_default(),
            description: input.description.unwrap_or_default(),
            features: new_user_features(),
        })
    }
}

/// Returns a fixed input; output filtering is the real one.
pub struct StubAuthorization {
    input: UserInput,
}

impl StubAuthorization {
    pub fn returning(input: UserInput) -> Self {
        Self { input }
    }
}

impl Authorization for StubAuthorization {
    fn filter_input(&self, _subject: Option<&str>, _action: Action, _raw: &Json) -> UserInput {
        self.input.clone()
    }

    fn filter_output(
        &self,
        subject: Option<&str>,
        action: Action,
        user: &UserRecord,
    ) -> PublicUser {
        DefaultAuthorization.filter_output(subject, action, user)
    }
}

#[derive(Default)]
pub struct RecordingActivation {
    sent: Mutex<Vec<UserRecord>>,
}

impl RecordingActivation {
    pub async fn sent(&self) -> Vec<UserRecord> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl Activation for RecordingActivation {
    async fn create_and_send_activation_email(
        &self,
        user: &UserRecord,
    ) -> Result<(), ActivationError> {
        self.sent.lock().await.push(user.clone());
        Ok(())
    }
}

pub struct FailingActivation;

#[async_trait]
impl Activation for FailingActivation {
    async fn create_and_send_activation_email(
        &self,
        _user: &UserRecord,
    ) -> Result<(), ActivationError> {
        Err(ActivationError::Backend("Mail relay unreachable".into()))
    }
}
