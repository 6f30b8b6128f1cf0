use axum::{
    routing::{get, post},
    Router,
};
use axum::extract::DefaultBodyLimit;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use super::handlers::{self, AppState};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/status", get(handlers::get_status))
        .route("/api/v1/metadata", get(handlers::get_metadata))
        .route("/api/v1/values", get(handlers::get_value))
        .route("/api/v1/timeseries", get(handlers::get_series))
        .route("/api/v1/timeseries/upload", post(handlers::upload_csv))
        .layer(
            ServiceBuilder::new()
                .layer(DefaultBodyLimit::max(100 * 1024 * 1024)) // 100MB limit
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
