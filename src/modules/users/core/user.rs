use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Features granted to every freshly created account until it is activated.
pub const NEW_USER_FEATURES: &[&str] = &["read:activation_token"];

pub fn new_user_features() -> Vec<String> {
    NEW_USER_FEATURES.iter().map(|f| f.to_string()).collect()
}

/// Sanitized creation input, as produced by the authorization filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInput {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub description: Option<String>,
}

/// A user as returned by the user store. `id` is optional because a store may
/// acknowledge a creation without handing back an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: Option<String>,
    pub username: String,
    pub email: String,
    pub description: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub username: String,
    pub description: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedUser {
    #[serde(flatten)]
    pub user: PublicUser,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CreatedUser {
    pub fn stamped(user: PublicUser, at: DateTime<Utc>) -> Self {
        Self {
            user,
            created_at: at,
            updated_at: at,
        }
    }
}
