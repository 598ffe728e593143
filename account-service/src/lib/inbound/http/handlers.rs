use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::account::errors::AccountError;

pub mod check_token;
pub mod delete_account;
pub mod get_avatar;
pub mod get_profile;
pub mod get_session_data;
pub mod list_accounts;
pub mod set_avatar;
pub mod signin;
pub mod signup;

pub const MISSING_TOKEN: &str = "missing token";
pub const INVALID_TOKEN: &str = "invalid token";
pub const INVALID_CREDENTIALS: &str = "invalid credentials";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::MissingToken => ApiError::Unauthorized(MISSING_TOKEN.to_string()),
            AccountError::InvalidToken(_) | AccountError::SessionSuperseded => {
                ApiError::Unauthorized(INVALID_TOKEN.to_string())
            }
            AccountError::InvalidCredentials => {
                ApiError::Unauthorized(INVALID_CREDENTIALS.to_string())
            }
            AccountError::NotFound(_) => ApiError::NotFound(err.to_string()),
            AccountError::UsernameAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            AccountError::InvalidUsername(_)
            | AccountError::InvalidEmail(_)
            | AccountError::InvalidAvatar(_) => ApiError::UnprocessableEntity(err.to_string()),
            AccountError::TokenIssuance(_)
            | AccountError::Credential(_)
            | AccountError::DatabaseError(_) => {
                tracing::error!(error = %err, "Request failed");
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use auth::JwtError;

    use super::*;
    use crate::domain::account::errors::AvatarError;

    #[test]
    fn test_token_failures_collapse_to_one_message() {
        let expired = ApiError::from(AccountError::InvalidToken(JwtError::Expired));
        let bad_signature = ApiError::from(AccountError::InvalidToken(JwtError::InvalidSignature));
        let superseded = ApiError::from(AccountError::SessionSuperseded);

        let expected = ApiError::Unauthorized(INVALID_TOKEN.to_string());
        assert_eq!(expired, expected);
        assert_eq!(bad_signature, expected);
        assert_eq!(superseded, expected);
    }

    #[test]
    fn test_error_taxonomy() {
        assert_eq!(
            ApiError::from(AccountError::InvalidCredentials),
            ApiError::Unauthorized(INVALID_CREDENTIALS.to_string())
        );
        assert!(matches!(
            ApiError::from(AccountError::UsernameAlreadyExists("alice".to_string())),
            ApiError::Conflict(_)
        ));
        assert!(matches!(
            ApiError::from(AccountError::NotFound("id".to_string())),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from(AccountError::InvalidAvatar(AvatarError::Empty)),
            ApiError::UnprocessableEntity(_)
        ));
    }

    #[test]
    fn test_internal_errors_do_not_leak_details() {
        let error = ApiError::from(AccountError::DatabaseError(
            "connection refused to 10.0.0.3".to_string(),
        ));
        assert_eq!(
            error,
            ApiError::InternalServerError("Internal server error".to_string())
        );
    }
}
