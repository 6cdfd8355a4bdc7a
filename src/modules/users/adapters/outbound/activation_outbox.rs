use crate::modules::users::core::ports::{Activation, ActivationError};
use crate::modules::users::core::user::UserRecord;
use crate::shared::core::primitives::{Clock, IdGenerator};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationRow {
    pub user_id: Option<String>,
    pub email: String,
    pub token: String,
    pub created_at: DateTime<Utc>,
}

/// Queues one activation e-mail per user. A relay is expected to drain `rows`.
pub struct InMemoryActivationOutbox {
    pub rows: Mutex<Vec<ActivationRow>>,
    seen: Mutex<HashSet<String>>,
    clock: Arc<dyn Clock>,
    tokens: Arc<dyn IdGenerator>,
    offline: bool,
}

impl InMemoryActivationOutbox {
    pub fn new(clock: Arc<dyn Clock>, tokens: Arc<dyn IdGenerator>) -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            seen: Mutex::new(HashSet::new()),
            clock,
            tokens,
            offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }
}

// Users without an id fall back to their address.
fn dedup_key(user: &UserRecord) -> String {
    match &user.id {
        Some(id) => format!("id:{id}"),
        None => format!("email:{}", user.email.to_lowercase()),
    }
}

#[async_trait::async_trait]
impl Activation for InMemoryActivationOutbox {
    async fn create_and_send_activation_email(
        &self,
        user: &UserRecord,
    ) -> Result<(), ActivationError> {
        if self.offline {
            return Err(ActivationError::Backend("Activation outbox offline".into()));
        }
        {
            let mut s = self.seen.lock().await;
            if !s.insert(dedup_key(user)) {
                return Err(ActivationError::Duplicate {
                    user: user.id.clone().unwrap_or_else(|| user.email.clone()),
                });
            }
        }
        let row = ActivationRow {
            user_id: user.id.clone(),
            email: user.email.clone(),
            token: self.tokens.next_id(),
            created_at: self.clock.now(),
        };
        tracing::debug!(user_id = ?row.user_id, "activation email queued");
        self.rows.lock().await.push(row);
        Ok(())
    }
}
