use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;
use std::convert::Infallible;
use std::net::SocketAddr;

/// Set by the upstream session middleware for authenticated requests.
pub const SESSION_USER_HEADER: &str = "x-session-user-id";
pub const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";
pub const UNKNOWN_CLIENT_IP: &str = "unknown";

/// Who is calling and from where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub session_user_id: Option<String>,
    pub client_ip: String,
}

fn header<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

impl RequestContext {
    pub fn from_parts(parts: &Parts) -> Self {
        let session_user_id = header(parts, SESSION_USER_HEADER).map(str::to_string);

        // x-forwarded-for may list a chain of proxies; the first entry is the client.
        let forwarded = header(parts, FORWARDED_FOR_HEADER)
            .and_then(|ips| ips.split(',').next())
            .map(str::trim)
            .filter(|ip| !ip.is_empty())
            .map(str::to_string);
        let client_ip = forwarded
            .or_else(|| {
                parts
                    .extensions
                    .get::<ConnectInfo<SocketAddr>>()
                    .map(|ConnectInfo(addr)| addr.ip().to_string())
            })
            .unwrap_or_else(|| UNKNOWN_CLIENT_IP.to_string());

        Self {
            session_user_id,
            client_ip,
        }
    }
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_parts(parts))
    }
}
