use axum::http::HeaderValue;
use std::net::SocketAddr;
use thiserror::Error;

pub const ADDR_VAR: &str = "USERS_API_ADDR";
pub const ALLOWED_ORIGIN_VAR: &str = "USERS_API_ALLOWED_ORIGIN";
pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// `None` means any origin is allowed.
    pub allowed_origin: Option<HeaderValue>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup(ADDR_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let bind_addr = raw_addr.trim().parse().map_err(|_| ConfigError::Invalid {
            name: ADDR_VAR,
            value: raw_addr.clone(),
        })?;

        let allowed_origin = match lookup(ALLOWED_ORIGIN_VAR).filter(|v| !v.trim().is_empty()) {
            Some(origin) => Some(HeaderValue::from_str(origin.trim()).map_err(|_| {
                ConfigError::Invalid {
                    name: ALLOWED_ORIGIN_VAR,
                    value: origin.clone(),
                }
            })?),
            None => None,
        };

        Ok(Self {
            bind_addr,
            allowed_origin,
        })
    }
}
