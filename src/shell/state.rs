use crate::modules::users::adapters::outbound::activation_outbox::InMemoryActivationOutbox;
use crate::modules::users::adapters::outbound::authorization::DefaultAuthorization;
use crate::modules::users::adapters::outbound::user_store_in_memory::InMemoryUserStore;
use crate::modules::users::core::events::AuditEvent;
use crate::modules::users::use_cases::create_user::handler::CreateUserHandler;
use crate::shared::core::primitives::{Clock, IdGenerator, SystemClock, UuidV7Generator};
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use std::sync::Arc;

pub type InMemoryCreateUserHandler =
    CreateUserHandler<InMemoryUserStore, InMemoryEventStore<AuditEvent>, InMemoryActivationOutbox>;

#[derive(Clone)]
pub struct AppState {
    pub create_user_handler: Arc<InMemoryCreateUserHandler>,
    pub user_store: Arc<InMemoryUserStore>,
    pub event_store: Arc<InMemoryEventStore<AuditEvent>>,
    pub activation_outbox: Arc<InMemoryActivationOutbox>,
}

impl AppState {
    pub fn new(
        user_store: Arc<InMemoryUserStore>,
        event_store: Arc<InMemoryEventStore<AuditEvent>>,
        activation_outbox: Arc<InMemoryActivationOutbox>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        let create_user_handler = Arc::new(
            CreateUserHandler::new(
                user_store.clone(),
                Arc::new(DefaultAuthorization),
                event_store.clone(),
                activation_outbox.clone(),
            )
            .with_clock(clock)
            .with_ids(ids),
        );
        Self {
            create_user_handler,
            user_store,
            event_store,
            activation_outbox,
        }
    }

    /// Wall clock, UUIDv7 ids and empty in-memory stores.
    pub fn in_memory() -> Self {
        let ids: Arc<dyn IdGenerator> = Arc::new(UuidV7Generator);
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        Self::new(
            Arc::new(InMemoryUserStore::new(ids.clone())),
            Arc::new(InMemoryEventStore::new()),
            Arc::new(InMemoryActivationOutbox::new(clock.clone(), ids.clone())),
            clock,
            ids,
        )
    }
}
