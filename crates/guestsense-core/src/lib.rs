//! Domain records, in-memory stores and service configuration for feedback synthesis

mod config;
mod store;
mod types;

pub use config::ServiceConfig;
pub use store::{FeedbackStore, StoreError, StoreStats};
pub use types::{
    fresh_id, AITextDraft, Insight, Priority, RawFeedback, Sentiment, SynthesisOutput,
    TaskStatus, TaskStatusUpdate, TaskTicket,
};
