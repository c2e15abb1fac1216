pub mod api;
pub mod config;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

/// Build the Axum router with all routes
pub fn build_router() -> Router {
    Router::new()
        .route("/", get(api::hello))
        .route("/status", get(api::get_status))
        .layer(CorsLayer::permissive())
}
