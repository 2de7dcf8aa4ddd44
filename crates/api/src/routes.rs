use crate::handlers;
use crate::state::AppState;
use axum::{
    body::Body,
    http::{Response, StatusCode},
    routing::get,
    Router,
};
use std::any::Any;
use std::time::Duration;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

/// Creates all API routes with state.
///
/// A panic inside a handler becomes a 500 instead of taking the connection
/// down; requests running past `request_timeout` get a 408.
pub fn create_api_routes(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/", get(handlers::health_check))
        .route("/domain/{domain}", get(handlers::get_domain))
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let message = panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    error!(panic = %message, "Request handler panicked");

    let mut response = Response::new(Body::empty());
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response
}
