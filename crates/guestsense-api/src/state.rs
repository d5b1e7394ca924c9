use chrono::{DateTime, Utc};
use guestsense_core::{FeedbackStore, ServiceConfig};
use guestsense_synthesis::SynthesisService;
use std::sync::Arc;

/// Shared handles passed to every request handler
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<FeedbackStore>,
    pub synthesis: Arc<SynthesisService>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(store: Arc<FeedbackStore>, synthesis: Arc<SynthesisService>) -> Self {
        Self {
            store,
            synthesis,
            started_at: Utc::now(),
        }
    }

    /// Fresh, empty stores and a synthesis service built from `config`
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(
            Arc::new(FeedbackStore::new()),
            Arc::new(SynthesisService::from_config(config)),
        )
    }
}
