use serde_json::Value as Json;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateUser {
    pub session_user_id: Option<String>,
    pub client_ip: String,
    pub body: Json,
}
