use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::session::models::IdentityClaim;

pub async fn check_token(
    Extension(claim): Extension<IdentityClaim>,
) -> Result<ApiSuccess<CheckTokenResponseData>, ApiError> {
    Ok(ApiSuccess::new(
        StatusCode::OK,
        CheckTokenResponseData {
            authenticated: true,
            account_id: claim.account_id.to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckTokenResponseData {
    pub authenticated: bool,
    pub account_id: String,
}
