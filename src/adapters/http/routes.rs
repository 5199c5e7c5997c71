//! HTTP routes for message endpoints.

use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use super::handlers::{get_message, get_message_count, post_message, MessageHandlers};

/// Creates the message router with all endpoints.
pub fn message_routes(handlers: MessageHandlers) -> Router {
    Router::new()
        .route("/messages", post(post_message).get(get_message_count))
        .route("/messages/:message_id", get(get_message))
        .with_state(handlers)
}

/// Creates the full application router with tracing, CORS, and timeout
/// layers.
///
/// CORS is allow-all: the website is served from a different origin than
/// the API, and the API carries no credentials.
pub fn app(handlers: MessageHandlers, request_timeout: Duration) -> Router {
    message_routes(handlers)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(request_timeout))
}
