use std::time::Duration;
use thiserror::Error;

const MAX_BODY_CHARS: usize = 500;

/// Every way a model call can fail. All of them route to the fallback output.
#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("Gemini client is not initialized.")]
    ClientUnavailable,

    #[error("request to the model failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("model returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("model response contained no text")]
    EmptyResponse,

    #[error("model output does not match the synthesis schema: {0}")]
    InvalidOutput(#[from] serde_json::Error),

    #[error("model call timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("model call aborted: {0}")]
    Aborted(String),
}

impl SynthesisError {
    /// Build a `Status` error, keeping only the head of a long response body
    pub fn status(status: u16, body: &str) -> Self {
        let mut head: String = body.chars().take(MAX_BODY_CHARS).collect();
        if body.chars().count() > MAX_BODY_CHARS {
            head.push_str("...");
        }
        SynthesisError::Status { status, body: head }
    }
}
