use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::post,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::users::use_cases::create_user::inbound::http as create_user_http;
use crate::shell::config::AppConfig;
use crate::shell::state::AppState;

pub const USERS_PATH: &str = "/api/v1/users";

fn cors(config: &AppConfig) -> CorsLayer {
    match &config.allowed_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin.clone())
            .allow_methods([Method::POST])
            .allow_headers([CONTENT_TYPE]),
        None => CorsLayer::permissive(),
    }
}

pub fn router(state: AppState, config: &AppConfig) -> Router {
    Router::new()
        .route(USERS_PATH, post(create_user_http::handle))
        .with_state(state)
        .layer(cors(config))
        .layer(TraceLayer::new_for_http())
}
