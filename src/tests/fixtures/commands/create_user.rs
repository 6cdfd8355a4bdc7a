// Shared test fixture for the CreateUser command, parsed from the JSON next to it.

use crate::modules::users::use_cases::create_user::command::CreateUser;
use serde::Deserialize;
use serde_json::Value as Json;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserDto {
    pub session_user_id: Option<String>,
    pub client_ip: String,
    pub body: Json,
}

pub struct CreateUserBuilder {
    inner: CreateUser,
}

impl Default for CreateUserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<CreateUser> for CreateUserBuilder {
    fn from(inner: CreateUser) -> Self {
        Self { inner }
    }
}

#[allow(dead_code)]
impl CreateUserBuilder {
    pub fn new() -> Self {
        let dto: CreateUserDto =
            serde_json::from_str(include_str!("json/create_user.json")).unwrap();
        Self {
            inner: CreateUser {
                session_user_id: dto.session_user_id,
                client_ip: dto.client_ip,
                body: dto.body,
            },
        }
    }

    pub fn session_user_id(mut self, v: Option<&str>) -> Self {
        self.inner.session_user_id = v.map(str::to_string);
        self
    }

    pub fn client_ip(mut self, v: impl Into<String>) -> Self {
        self.inner.client_ip = v.into();
        self
    }

    pub fn body(mut self, v: Json) -> Self {
        self.inner.body = v;
        self
    }

    pub fn build(self) -> CreateUser {
        self.inner
    }
}

#[cfg(test)]
mod create_user_builder_tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = CreateUserBuilder::default().build();
        assert_eq!(built.session_user_id.as_deref(), Some("admin-user-id"));
        assert_eq!(built.client_ip, "127.0.0.1");
        assert_eq!(built.body["email"], "test@example.com");
        assert_eq!(built.body["description"], "Minha Bio");
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = CreateUserBuilder::new()
            .session_user_id(None)
            .client_ip("10.0.0.1")
            .body(json!({ "username": "other" }))
            .build();

        assert_eq!(custom.session_user_id, None);
        assert_eq!(custom.client_ip, "10.0.0.1");
        assert_eq!(custom.body, json!({ "username": "other" }));
    }
}
