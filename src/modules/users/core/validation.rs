use crate::modules::users::core::ports::UserStoreError;
use crate::modules::users::core::user::UserInput;

pub const USERNAME_MIN: usize = 3;
pub const USERNAME_MAX: usize = 30;
pub const PASSWORD_MIN: usize = 8;
pub const PASSWORD_MAX: usize = 72;
pub const DESCRIPTION_MAX: usize = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidNewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub description: String,
}

fn invalid(key: &'static str, message: impl Into<String>) -> UserStoreError {
    UserStoreError::Invalid {
        key,
        message: message.into(),
    }
}

/// The stored form of each field. Anything answering as a created user must go
/// through these so the answer matches what the store would have kept.
pub fn normalize_username(raw: Option<&str>) -> String {
    raw.map(str::trim).unwrap_or_default().to_string()
}

pub fn normalize_email(raw: Option<&str>) -> String {
    raw.map(str::trim).unwrap_or_default().to_lowercase()
}

pub fn normalize_description(raw: Option<&str>) -> String {
    raw.map(str::trim).unwrap_or_default().to_string()
}

pub fn validate_username(raw: Option<&str>) -> Result<String, UserStoreError> {
    let username = normalize_username(raw);
    if username.is_empty() {
        return Err(invalid("username", "is required"));
    }
    let len = username.chars().count();
    if !(USERNAME_MIN..=USERNAME_MAX).contains(&len) {
        return Err(invalid(
            "username",
            format!("must have between {USERNAME_MIN} and {USERNAME_MAX} characters"),
        ));
    }
    if !username.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(invalid("username", "must contain only letters and digits"));
    }
    Ok(username)
}

pub fn validate_email(raw: Option<&str>) -> Result<String, UserStoreError> {
    let email = normalize_email(raw);
    if email.is_empty() {
        return Err(invalid("email", "is required"));
    }
    let well_formed = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if !well_formed {
        return Err(invalid("email", "must be a valid e-mail address"));
    }
    Ok(email)
}

pub fn validate_password(raw: Option<&str>) -> Result<String, UserStoreError> {
    let Some(password) = raw.filter(|p| !p.is_empty()) else {
        return Err(invalid("password", "is required"));
    };
    let len = password.chars().count();
    if !(PASSWORD_MIN..=PASSWORD_MAX).contains(&len) {
        return Err(invalid(
            "password",
            format!("must have between {PASSWORD_MIN} and {PASSWORD_MAX} characters"),
        ));
    }
    Ok(password.to_string())
}

pub fn validate_description(raw: Option<&str>) -> Result<String, UserStoreError> {
    let description = normalize_description(raw);
    if description.chars().count() > DESCRIPTION_MAX {
        return Err(invalid(
            "description",
            format!("must have at most {DESCRIPTION_MAX} characters"),
        ));
    }
    Ok(description)
}

/// Checks fields in a fixed order and reports the first failure.
pub fn validate_new_user(input: &UserInput) -> Result<ValidNewUser, UserStoreError> {
    Ok(ValidNewUser {
        username: validate_username(input.username.as_deref())?,
        email: validate_email(input.email.as_deref())?,
        password: validate_password(input.password.as_deref())?,
        description: validate_description(input.description.as_deref())?,
    })
}
