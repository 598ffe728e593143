use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::account::models::Avatar;
use crate::domain::session::models::IdentityClaim;
use crate::inbound::http::router::AppState;

pub async fn get_avatar(
    State(state): State<AppState>,
    Extension(claim): Extension<IdentityClaim>,
) -> Result<ApiSuccess<GetAvatarResponseData>, ApiError> {
    state
        .account_service
        .get_avatar(&claim)
        .await
        .map_err(ApiError::from)
        .map(|avatar| ApiSuccess::new(StatusCode::OK, avatar.into()))
}

/// `avatar` is null when the account never set one
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetAvatarResponseData {
    pub avatar: Option<String>,
    pub message: String,
}

impl From<Option<Avatar>> for GetAvatarResponseData {
    fn from(avatar: Option<Avatar>) -> Self {
        match avatar {
            Some(avatar) => Self {
                avatar: Some(avatar.as_str().to_string()),
                message: "Avatar found for this user.".to_string(),
            },
            None => Self {
                avatar: None,
                message: "This user does not have an avatar.".to_string(),
            },
        }
    }
}
