mod handlers;

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use tower_http::{
    cors::CorsLayer, services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};

use crate::config::DashboardConfig;

/// Build the dashboard router.
///
/// `/data.json` is rebuilt from the workspaces on every request; everything
/// outside `/data.json` and `/api/v1` is served from `static_dir`.
pub fn create_router(config: DashboardConfig) -> Router {
    let static_files = ServeDir::new(&config.static_dir);

    let api = Router::new()
        .route("/agents/{id}", get(handlers::get_agent))
        .route("/health", get(handlers::health));

    Router::new()
        .route("/data.json", get(handlers::get_snapshot))
        .nest("/api/v1", api)
        .fallback_service(static_files)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache"),
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(config))
}
