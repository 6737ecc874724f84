use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::config::DashboardConfig;
use crate::models::{AgentRecord, Snapshot};
use crate::snapshot::{build_agent_record, build_snapshot, write_snapshot};

const NO_STORE: &str = "no-cache, no-store, must-revalidate";

// ============================================================
// Error Handling
// ============================================================

/// Log an internal error and return a sanitized response to the client.
fn internal_error(e: impl std::fmt::Display) -> (StatusCode, String) {
    tracing::error!("Internal error: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
    )
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Snapshot
// ============================================================

/// Regenerate the snapshot, persist it, and return it uncached.
///
/// Extraction does blocking file I/O, so it runs on the blocking pool.
/// A failed write is logged; the fresh snapshot is still returned.
pub async fn get_snapshot(
    State(config): State<Arc<DashboardConfig>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let snapshot: Snapshot = tokio::task::spawn_blocking(move || {
        let snapshot = build_snapshot(&config.agents);
        if let Err(e) = write_snapshot(&snapshot, &config.output) {
            tracing::warn!("Failed to persist snapshot: {}", e);
        }
        snapshot
    })
    .await
    .map_err(internal_error)?;

    Ok(([(header::CACHE_CONTROL, NO_STORE)], Json(snapshot)))
}

// ============================================================
// Agents
// ============================================================

pub async fn get_agent(
    State(config): State<Arc<DashboardConfig>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let Some(agent) = config.agents.iter().find(|a| a.id == id).cloned() else {
        return Err((StatusCode::NOT_FOUND, "Agent not found".to_string()));
    };

    let record: AgentRecord = tokio::task::spawn_blocking(move || build_agent_record(&agent))
        .await
        .map_err(internal_error)?;

    Ok(([(header::CACHE_CONTROL, NO_STORE)], Json(record)))
}
