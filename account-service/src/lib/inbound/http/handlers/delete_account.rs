use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::session::models::IdentityClaim;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn delete_account(
    State(state): State<AppState>,
    Extension(claim): Extension<IdentityClaim>,
) -> Result<ApiSuccess<()>, ApiError> {
    state
        .account_service
        .delete_account(&claim)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}
