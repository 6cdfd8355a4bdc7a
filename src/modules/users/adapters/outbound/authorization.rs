use serde_json::Value as Json;

use crate::modules::users::core::ports::{Action, Authorization};
use crate::modules::users::core::user::{PublicUser, UserInput, UserRecord};

/// Whitelist based filtering. Anonymous and authenticated subjects are treated alike.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultAuthorization;

fn string_field(raw: &Json, key: &str) -> Option<String> {
    raw.get(key).and_then(Json::as_str).map(str::to_string)
}

impl Authorization for DefaultAuthorization {
    fn filter_input(&self, _subject: Option<&str>, action: Action, raw: &Json) -> UserInput {
        match action {
            Action::CreateUser => UserInput {
                username: string_field(raw, "username"),
                email: string_field(raw, "email"),
                password: string_field(raw, "password"),
                description: string_field(raw, "description"),
            },
            // Nothing is writable through a read.
            Action::ReadUser => UserInput::default(),
        }
    }

    fn filter_output(
        &self,
        _subject: Option<&str>,
        _action: Action,
        user: &UserRecord,
    ) -> PublicUser {
        PublicUser {
            id: user.id.clone(),
            username: user.username.clone(),
            description: user.description.clone(),
            features: user.features.clone(),
        }
    }
}
