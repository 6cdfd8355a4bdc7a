use axum::{
    Json,
    extract::State,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;

use crate::modules::users::core::ports::{ErrorKind, UserStoreError};
use crate::modules::users::use_cases::create_user::command::CreateUser;
use crate::modules::users::use_cases::create_user::handler::ApplicationError;
use crate::shell::request_context::RequestContext;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub key: Option<&'static str>,
    pub message: String,
}

fn rejected(error: &UserStoreError) -> Response {
    match error.kind() {
        ErrorKind::Infrastructure => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        ErrorKind::DuplicateEmail | ErrorKind::DuplicateUsername | ErrorKind::InvalidInput => (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                error: ErrorDetail {
                    key: error.key(),
                    message: error.to_string(),
                },
            }),
        )
            .into_response(),
    }
}

pub async fn handle(
    State(state): State<AppState>,
    context: RequestContext,
    body: Result<Json<Value>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) if b.is_object() => b,
        _ => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = CreateUser {
        session_user_id: context.session_user_id,
        client_ip: context.client_ip,
        body,
    };

    match state.create_user_handler.handle(command).await {
        Ok(outcome) => (StatusCode::CREATED, Json(outcome.into_payload())).into_response(),
        Err(ApplicationError::UserStore(error)) => rejected(&error),
        Err(error) => {
            tracing::error!(error = %error, "create user failed after the user was stored");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
