use crate::error::ApiError;
use crate::ingest;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use chrono::{DateTime, Utc};
use guestsense_core::{
    AITextDraft, Insight, RawFeedback, StoreStats, SynthesisOutput, TaskStatusUpdate, TaskTicket,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub model: String,
    pub ai_client: &'static str,
    pub started_at: DateTime<Utc>,
    pub stored: StoreStats,
}

pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    Ok(Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        model: state.synthesis.model().to_string(),
        ai_client: if state.synthesis.is_client_ready() {
            "ready"
        } else {
            "unavailable"
        },
        started_at: state.started_at,
        stored: state.store.stats()?,
    }))
}

pub async fn ingest_and_synthesize(
    State(state): State<AppState>,
    payload: Result<Json<Vec<RawFeedback>>, JsonRejection>,
) -> Result<Json<SynthesisOutput>, ApiError> {
    let Json(batch) = payload?;
    let output = ingest::ingest_and_synthesize(&state, batch).await?;
    Ok(Json(output))
}

pub async fn list_tasks(
    State(state): State<AppState>,
) -> Result<Json<Vec<TaskTicket>>, ApiError> {
    Ok(Json(state.store.list_open_tasks()?))
}

pub async fn update_task_status(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
    payload: Result<Json<TaskStatusUpdate>, JsonRejection>,
) -> Result<Json<TaskTicket>, ApiError> {
    let Json(update) = payload?;
    match state.store.update_task_status(&task_id, update.status)? {
        Some(task) => {
            tracing::info!(%task_id, status = update.status.as_str(), "task status updated");
            Ok(Json(task))
        }
        None => Err(ApiError::NotFound("Task not found.".to_string())),
    }
}

pub async fn list_insights(
    State(state): State<AppState>,
) -> Result<Json<Vec<Insight>>, ApiError> {
    Ok(Json(state.store.list_insights()?))
}

pub async fn list_drafts(
    State(state): State<AppState>,
) -> Result<Json<Vec<AITextDraft>>, ApiError> {
    Ok(Json(state.store.list_drafts()?))
}

pub async fn list_feedback(
    State(state): State<AppState>,
) -> Result<Json<Vec<RawFeedback>>, ApiError> {
    Ok(Json(state.store.list_feedback()?))
}

pub async fn get_feedback(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RawFeedback>, ApiError> {
    state
        .store
        .get_feedback(&id)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Feedback not found.".to_string()))
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound("Not Found".to_string())
}
