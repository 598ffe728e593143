use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::check_token::check_token;
use super::handlers::delete_account::delete_account;
use super::handlers::get_avatar::get_avatar;
use super::handlers::get_profile::get_profile;
use super::handlers::get_session_data::get_session_data;
use super::handlers::list_accounts::list_accounts;
use super::handlers::set_avatar::set_avatar;
use super::handlers::signin::signin;
use super::handlers::signup::signup;
use super::middleware::authenticate;
use crate::domain::account::ports::AccountServicePort;
use crate::domain::session::ports::SessionServicePort;

#[derive(Clone)]
pub struct AppState {
    pub session_service: Arc<dyn SessionServicePort>,
    pub account_service: Arc<dyn AccountServicePort>,
}

pub fn create_router(
    session_service: Arc<dyn SessionServicePort>,
    account_service: Arc<dyn AccountServicePort>,
) -> Router {
    let state = AppState {
        session_service,
        account_service,
    };

    let public_routes = Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/signin", post(signin));

    let protected_routes = Router::new()
        .route("/auth/check", get(check_token))
        .route("/auth/user", get(get_profile))
        .route("/auth/drop", delete(delete_account))
        .route("/auth/data", get(get_session_data))
        .route("/auth/users", get(list_accounts))
        .route("/auth/addavatar", patch(set_avatar))
        .route("/auth/avatar", get(get_avatar))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            // Headers are left out: they carry bearer tokens
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
