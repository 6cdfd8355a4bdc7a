use crate::modules::users::core::ports::{UserStore, UserStoreError};
use crate::modules::users::core::user::{UserInput, UserRecord, new_user_features};
use crate::modules::users::core::validation::validate_new_user;
use crate::shared::core::primitives::IdGenerator;
use std::sync::Arc;
use tokio::sync::RwLock;

pub struct InMemoryUserStore {
    users: RwLock<Vec<UserRecord>>,
    ids: Arc<dyn IdGenerator>,
    offline: bool,
}

impl InMemoryUserStore {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            ids,
            offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    pub async fn users(&self) -> Vec<UserRecord> {
        self.users.read().await.clone()
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryUserStore {
    async fn create(&self, input: UserInput) -> Result<UserRecord, UserStoreError> {
        if self.offline {
            return Err(UserStoreError::Backend("User store offline".into()));
        }
        let valid = validate_new_user(&input)?;

        let mut users = self.users.write().await;
        if users
            .iter()
            .any(|u| u.username.eq_ignore_ascii_case(&valid.username))
        {
            return Err(UserStoreError::DuplicateUsername);
        }
        if users.iter().any(|u| u.email.eq_ignore_ascii_case(&valid.email)) {
            return Err(UserStoreError::DuplicateEmail);
        }

        let record = UserRecord {
            id: Some(self.ids.next_id()),
            username: valid.username,
            email: valid.email,
            description: valid.description,
            features: new_user_features(),
        };
        users.push(record.clone());
        Ok(record)
    }
}
