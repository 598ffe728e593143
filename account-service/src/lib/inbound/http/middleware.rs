use axum::extract::Request;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use http::header::AUTHORIZATION;
use http::HeaderMap;

use crate::domain::account::errors::AccountError;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

const BEARER_SCHEME: &str = "bearer";

/// Pull the token out of an `Authorization: Bearer <token>` header.
///
/// The scheme is matched case-insensitively. A missing header, another scheme
/// or an empty token all count as no token at all.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AccountError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AccountError::MissingToken)?
        .to_str()
        .map_err(|_| AccountError::MissingToken)?;

    let (scheme, token) = value
        .trim()
        .split_once(' ')
        .ok_or(AccountError::MissingToken)?;

    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return Err(AccountError::MissingToken);
    }

    match token.trim() {
        "" => Err(AccountError::MissingToken),
        token => Ok(token),
    }
}

/// Auth gate for protected routes.
///
/// Resolves the bearer token into an `IdentityClaim` and stores it in the
/// request extensions. Rejected requests never reach the handler and get a
/// 401 whose message does not reveal why the token was refused.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let uri = req.uri().clone();

    // Request bodies are not Sync, so no borrow of req may live across the await
    let token = bearer_token(req.headers())
        .map_err(|e| {
            tracing::warn!(uri = %uri, "Request without bearer token");
            ApiError::from(e).into_response()
        })?
        .to_string();

    let claim = state
        .session_service
        .authorize(&token)
        .await
        .map_err(|e| {
            if e.is_unauthorized() {
                tracing::warn!(uri = %uri, error = %e, "Bearer token rejected");
            }
            ApiError::from(e).into_response()
        })?;

    req.extensions_mut().insert(claim);

    Ok(next.run(req).await)
}
