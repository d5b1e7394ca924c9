//! Synthesis orchestration: prompt, bounded model call, strict parse, fallback

use crate::client::{GeminiClient, ModelClient};
use crate::error::SynthesisError;
use crate::fallback::fallback_output;
use crate::prompt::build_synthesis_prompt;
use crate::schema::synthesis_output_schema;
use guestsense_core::{RawFeedback, ServiceConfig, SynthesisOutput};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Result of one synthesis pass
#[derive(Debug)]
pub enum SynthesisOutcome {
    /// Parsed model output (or the empty output for an empty batch)
    Generated(SynthesisOutput),
    /// The model could not be used; `output` is the fixed fallback payload
    Fallback {
        output: SynthesisOutput,
        error: SynthesisError,
    },
}

impl SynthesisOutcome {
    fn fallback(error: SynthesisError) -> Self {
        SynthesisOutcome::Fallback {
            output: fallback_output(&error.to_string()),
            error,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, SynthesisOutcome::Fallback { .. })
    }

    pub fn output(&self) -> &SynthesisOutput {
        match self {
            SynthesisOutcome::Generated(output) => output,
            SynthesisOutcome::Fallback { output, .. } => output,
        }
    }

    pub fn into_output(self) -> SynthesisOutput {
        match self {
            SynthesisOutcome::Generated(output) => output,
            SynthesisOutcome::Fallback { output, .. } => output,
        }
    }
}

/// Strictly parse model text into a `SynthesisOutput`
pub fn parse_synthesis_output(text: &str) -> Result<SynthesisOutput, SynthesisError> {
    Ok(serde_json::from_str(text)?)
}

pub struct SynthesisService {
    client: Option<Arc<dyn ModelClient>>,
    model: String,
    timeout: Duration,
    schema: Value,
}

impl SynthesisService {
    pub fn new(
        client: Option<Arc<dyn ModelClient>>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            model: model.into(),
            timeout,
            schema: synthesis_output_schema(),
        }
    }

    /// Build the service with a Gemini client.
    ///
    /// A missing credential or a client that fails to build leaves the service
    /// without a client; every call then takes the fallback path.
    pub fn from_config(config: &ServiceConfig) -> Self {
        let client: Option<Arc<dyn ModelClient>> = match GeminiClient::from_config(config) {
            Ok(Some(client)) => Some(Arc::new(client)),
            Ok(None) => {
                tracing::warn!(
                    "no {} configured; synthesis will use fallback output",
                    ServiceConfig::ENV_API_KEY
                );
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "Gemini client failed to initialize");
                None
            }
        };
        Self::new(client, config.model.clone(), config.ai_timeout)
    }

    pub fn is_client_ready(&self) -> bool {
        self.client.is_some()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Synthesize a batch, reporting whether the fallback was used. Never fails.
    pub async fn run(&self, batch: &[RawFeedback]) -> SynthesisOutcome {
        if batch.is_empty() {
            return SynthesisOutcome::Generated(SynthesisOutput::default());
        }

        match self.request(batch).await {
            Ok(output) => {
                tracing::info!(
                    insights = output.insights.len(),
                    tasks = output.tasks_to_create.len(),
                    drafts = output.drafted_responses.len(),
                    "synthesis complete"
                );
                SynthesisOutcome::Generated(output)
            }
            Err(e) => {
                tracing::warn!(error = %e, "AI service unavailable, using fallback output");
                SynthesisOutcome::fallback(e)
            }
        }
    }

    /// Synthesize a batch, always returning a usable output
    pub async fn synthesize(&self, batch: &[RawFeedback]) -> SynthesisOutput {
        self.run(batch).await.into_output()
    }

    async fn request(&self, batch: &[RawFeedback]) -> Result<SynthesisOutput, SynthesisError> {
        let client = self.client.as_ref().ok_or(SynthesisError::ClientUnavailable)?;
        let prompt = build_synthesis_prompt(batch);

        // Own task so a panicking client surfaces as a JoinError instead of unwinding the caller
        let client = Arc::clone(client);
        let model = self.model.clone();
        let schema = self.schema.clone();
        let mut call =
            tokio::spawn(async move { client.generate_json(&model, &prompt, &schema).await });

        let joined = match tokio::time::timeout(self.timeout, &mut call).await {
            Ok(joined) => joined,
            Err(_) => {
                call.abort();
                return Err(SynthesisError::Timeout(self.timeout));
            }
        };
        let text = joined.map_err(|e| SynthesisError::Aborted(e.to_string()))??;

        parse_synthesis_output(&text)
    }
}
