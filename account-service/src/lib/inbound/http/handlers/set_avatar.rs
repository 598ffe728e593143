use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::account::errors::AccountError;
use crate::domain::account::models::AvatarChange;
use crate::domain::session::models::IdentityClaim;
use crate::inbound::http::router::AppState;

pub async fn set_avatar(
    State(state): State<AppState>,
    Extension(claim): Extension<IdentityClaim>,
    Json(body): Json<SetAvatarRequest>,
) -> Result<ApiSuccess<SetAvatarResponseData>, ApiError> {
    state
        .account_service
        .set_avatar(&claim, body.avatar)
        .await
        .map_err(|e| match e {
            AccountError::InvalidAvatar(_) => ApiError::UnprocessableEntity(
                "Avatar could not be added for this user.".to_string(),
            ),
            _ => ApiError::from(e),
        })
        .map(|change| ApiSuccess::new(StatusCode::OK, change.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SetAvatarRequest {
    avatar: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetAvatarResponseData {
    pub outcome: String,
    pub message: String,
}

impl From<AvatarChange> for SetAvatarResponseData {
    fn from(change: AvatarChange) -> Self {
        Self {
            outcome: change.as_str().to_string(),
            message: change.message().to_string(),
        }
    }
}
