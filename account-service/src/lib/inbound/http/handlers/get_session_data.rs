use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::session::models::IdentityClaim;
use crate::inbound::http::router::AppState;

/// Returns the token stored on the caller's account, which may differ from
/// the one presented under the stateless policy.
pub async fn get_session_data(
    State(state): State<AppState>,
    Extension(claim): Extension<IdentityClaim>,
) -> Result<ApiSuccess<SessionDataResponseData>, ApiError> {
    state
        .account_service
        .current_token(&claim)
        .await
        .map_err(ApiError::from)
        .map(|token| ApiSuccess::new(StatusCode::OK, SessionDataResponseData { token }))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionDataResponseData {
    pub token: String,
}
