use crate::modules::users::core::events::{AuditEvent, AuditEventType};
use crate::modules::users::core::ports::{
    Action, Activation, ActivationError, Authorization, UserStore, UserStoreError,
};
use crate::modules::users::core::user::{CreatedUser, UserInput, UserRecord, new_user_features};
use crate::modules::users::core::validation::{
    normalize_description, normalize_email, normalize_username,
};
use crate::modules::users::use_cases::create_user::attribution::resolve_attribution;
use crate::modules::users::use_cases::create_user::command::CreateUser;
use crate::modules::users::use_cases::create_user::decision::{FailureHandling, Outcome, classify};
use crate::shared::core::primitives::{Clock, IdGenerator, SystemClock, UuidV7Generator};
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};
use chrono::{DateTime, Utc};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The user store error exactly as the store raised it.
    #[error(transparent)]
    UserStore(#[from] UserStoreError),

    #[error(transparent)]
    EventStore(#[from] EventStoreError),

    #[error(transparent)]
    Activation(#[from] ActivationError),
}

pub struct CreateUserHandler<TUserStore, TEventStore, TActivation>
where
    TUserStore: UserStore + 'static,
    TEventStore: EventStore<AuditEvent> + 'static,
    TActivation: Activation + 'static,
{
    user_store: Arc<TUserStore>,
    authorization: Arc<dyn Authorization>,
    event_store: Arc<TEventStore>,
    activation: Arc<TActivation>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl<TUserStore, TEventStore, TActivation> CreateUserHandler<TUserStore, TEventStore, TActivation>
where
    TUserStore: UserStore + 'static,
    TEventStore: EventStore<AuditEvent> + 'static,
    TActivation: Activation + 'static,
{
    pub fn new(
        user_store: Arc<TUserStore>,
        authorization: Arc<dyn Authorization>,
        event_store: Arc<TEventStore>,
        activation: Arc<TActivation>,
    ) -> Self {
        Self {
            user_store,
            authorization,
            event_store,
            activation,
            clock: Arc::new(SystemClock),
            ids: Arc::new(UuidV7Generator),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_ids(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    #[tracing::instrument(name = "create_user", skip_all, fields(client_ip = %command.client_ip))]
    pub async fn handle(&self, command: CreateUser) -> Result<Outcome, ApplicationError> {
        let now = self.clock.now();
        let session_user_id = command.session_user_id.as_deref();
        let input = self
            .authorization
            .filter_input(session_user_id, Action::CreateUser, &command.body);

        let new_user = match self.user_store.create(input.clone()).await {
            Ok(user) => user,
            Err(error) => {
                return match classify(&error) {
                    FailureHandling::MaskAsCreated => {
                        tracing::info!("duplicate email answered as a created user");
                        Ok(Outcome::MaskedDuplicateEmail(
                            self.synthesize_created(input, now),
                        ))
                    }
                    FailureHandling::Propagate => {
                        tracing::warn!(error = %error, key = ?error.key(), "user creation failed");
                        Err(ApplicationError::UserStore(error))
                    }
                };
            }
        };

        let originator = resolve_attribution(session_user_id, new_user.id.as_deref());
        self.event_store
            .create(AuditEvent {
                event_type: AuditEventType::CreateUser,
                originator_user_id: originator.into_originator(),
                originator_ip: command.client_ip,
                metadata: json!({ "id": new_user.id }),
            })
            .await?;

        self.activation
            .create_and_send_activation_email(&new_user)
            .await?;

        tracing::info!(user_id = ?new_user.id, "user created");
        Ok(Outcome::Created(self.present(&new_user, now)))
    }

    fn present(&self, user: &UserRecord, now: DateTime<Utc>) -> CreatedUser {
        let mut view = self
            .authorization
            .filter_output(user.id.as_deref(), Action::ReadUser, user);
        view.id = user.id.clone();
        CreatedUser::stamped(view, now)
    }

    // Fields take the store's normalized form so both 201 bodies look alike.
    fn synthesize_created(&self, input: UserInput, now: DateTime<Utc>) -> CreatedUser {
        let synthesized = UserRecord {
            id: Some(self.ids.next_id()),
            username: normalize_username(input.username.as_deref()),
            email: normalize_email(input.email.as_deref()),
            description: normalize_description(input.description.as_deref()),
            features: new_user_features(),
        };
        self.present(&synthesized, now)
    }
}
