//! Feedback synthesis via a generative model, with a fixed fallback on any failure

mod client;
mod error;
mod fallback;
mod prompt;
mod schema;
mod service;

pub use client::{build_request_body, extract_candidate_text, GeminiClient, ModelClient};
pub use error::SynthesisError;
pub use fallback::{fallback_output, FALLBACK_SOURCE_ID};
pub use prompt::{build_synthesis_prompt, FEEDBACK_DELIMITER};
pub use schema::synthesis_output_schema;
pub use service::{parse_synthesis_output, SynthesisOutcome, SynthesisService};
