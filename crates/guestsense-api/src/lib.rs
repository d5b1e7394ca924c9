//! HTTP surface for feedback ingestion and synthesis results

mod error;
mod handlers;
mod ingest;
mod router;
mod state;

pub use error::ApiError;
pub use ingest::{assign_ids, ingest_and_synthesize};
pub use router::build_router;
pub use state::AppState;
