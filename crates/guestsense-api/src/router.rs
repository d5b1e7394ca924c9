use crate::error::handle_panic;
use crate::handlers;
use crate::state::AppState;
use axum::routing::{get, post, put};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/ingest_and_synthesize", post(handlers::ingest_and_synthesize))
        .route("/tasks", get(handlers::list_tasks))
        .route("/tasks/{task_id}", put(handlers::update_task_status))
        .route("/insights", get(handlers::list_insights))
        .route("/drafts", get(handlers::list_drafts))
        .route("/feedback", get(handlers::list_feedback))
        .route("/feedback/{id}", get(handlers::get_feedback));

    Router::new()
        .route("/health", get(handlers::health))
        .nest("/api/v1", api)
        .fallback(handlers::not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
