//! The ingest-and-synthesize pipeline
//!
//! Feedback is stored before the model call and results after it, so no store
//! lock is held while the call is in flight.

use crate::error::ApiError;
use crate::state::AppState;
use guestsense_core::{fresh_id, RawFeedback, SynthesisOutput};

/// Replace every task and insight id with a fresh server id.
///
/// Ids proposed by the model (or the fallback) are never trusted. Drafts are
/// left untouched and carry no id.
pub fn assign_ids(output: &mut SynthesisOutput) {
    for task in &mut output.tasks_to_create {
        task.task_id = fresh_id();
    }
    for insight in &mut output.insights {
        insight.id = fresh_id();
    }
}

pub async fn ingest_and_synthesize(
    state: &AppState,
    mut batch: Vec<RawFeedback>,
) -> Result<SynthesisOutput, ApiError> {
    tracing::info!(items = batch.len(), "received feedback batch");
    if batch.is_empty() {
        return Err(ApiError::EmptyBatch);
    }

    state.store.upsert_feedback(&mut batch)?;

    let outcome = state.synthesis.run(&batch).await;
    if outcome.is_fallback() {
        tracing::info!(items = batch.len(), "storing fallback synthesis output");
    }
    let mut output = outcome.into_output();
    assign_ids(&mut output);

    state.store.record_synthesis(&output)?;

    Ok(output)
}
