use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::signup::SessionResponseData;
use super::ApiError;
use super::ApiSuccess;
use super::INVALID_CREDENTIALS;
use crate::domain::account::models::Username;
use crate::domain::session::models::SigninCommand;
use crate::inbound::http::router::AppState;

pub async fn signin(
    State(state): State<AppState>,
    Json(body): Json<SigninRequest>,
) -> Result<ApiSuccess<SessionResponseData>, ApiError> {
    // A username that cannot exist is just another failed signin
    let username = Username::new(body.username)
        .map_err(|_| ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

    let command = SigninCommand {
        username,
        password: body.password,
    };

    state
        .session_service
        .signin(command)
        .await
        .map_err(ApiError::from)
        .map(|ref session| ApiSuccess::new(StatusCode::OK, session.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SigninRequest {
    username: String,
    password: String,
}
