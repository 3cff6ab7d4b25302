//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Catalog
        .route("/fleet", get(handlers::list_fleet))
        .route("/fleet/search", post(handlers::search_fleet))
        .route("/fleet/{aircraft_id}", get(handlers::get_aircraft))
        // Quote pipeline
        .route("/quotes", post(handlers::create_quote))
        .route("/rewards", get(handlers::rewards_preview))
        // Booking sessions
        .route("/sessions", get(handlers::list_sessions))
        .route("/sessions", post(handlers::create_session))
        .route("/sessions/{session_id}", get(handlers::get_session))
        .route("/sessions/{session_id}", put(handlers::put_session))
        .route(
            "/sessions/{session_id}",
            axum::routing::delete(handlers::delete_session),
        )
        // Checkout hand-off
        .route("/checkout", post(handlers::submit_checkout));

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        // Itinerary payloads are small; keep request bodies bounded.
        .layer(DefaultBodyLimit::max(1024 * 1024))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
