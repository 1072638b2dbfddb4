use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::AppState;
use crate::middleware::{make_render_span, request_id_middleware, session_middleware};

/// Creates the UI router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Views
        .route("/", get(handlers::index))
        .route("/session", get(handlers::get_session))
        // UI events
        .route("/select", post(handlers::select_movie))
        .route("/back", post(handlers::back))
        .route("/browse", post(handlers::browse))
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(middleware::from_fn(session_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_render_span)),
        )
        .with_state(state)
}
