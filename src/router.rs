use crate::handlers::{
    billboards::get_billboards,
    health::{health_check, home},
    predictions::get_prediction,
};
use crate::schemas::{ApiDoc, AppState};
use axum::{response::Json, routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health_check))
        .route(common::BILLBOARDS_ENDPOINT, get(get_billboards))
        .route("/api/predict/:billboard_id", get(get_prediction))
        .route("/api-docs/openapi.json", get(openapi_json))
        // The dashboard is served from another origin
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
