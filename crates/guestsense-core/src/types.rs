//! Feedback, insight, task and draft records

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generate a fresh server-side identifier
pub fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

/// Sentiment label attached to an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// Task urgency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

/// Task lifecycle state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress", alias = "In-Progress", alias = "InProgress")]
    InProgress,
    Complete,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Complete => "Complete",
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, TaskStatus::Complete)
    }
}

/// A single piece of customer feedback as submitted by a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFeedback {
    /// Caller-supplied id; assigned by the server when missing or empty
    #[serde(default)]
    pub id: Option<String>,
    pub text: String,
}

impl RawFeedback {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: None,
            text: text.into(),
        }
    }

    pub fn with_id(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            text: text.into(),
        }
    }

    /// The effective id, treating an empty string as absent
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// Assign a fresh id if none is set, returning the id now in effect
    pub fn ensure_id(&mut self) -> &str {
        if self.id().is_none() {
            self.id = Some(fresh_id());
        }
        self.id.as_deref().unwrap_or_default()
    }
}

/// A recurring theme extracted from a feedback batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    /// Overwritten with a server id when stored
    #[serde(default)]
    pub id: String,
    pub text: String,
    pub sentiment: Sentiment,
}

/// An actionable ticket proposed by synthesis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskTicket {
    /// Overwritten with a server id when stored
    #[serde(default)]
    pub task_id: String,
    pub summary: String,
    pub details: String,
    pub priority: Priority,
    #[serde(default)]
    pub status: TaskStatus,
    /// Back-reference to the originating feedback; not required to resolve
    pub source_feedback_id: String,
}

/// A drafted reply to a piece of feedback. Drafts carry no id of their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AITextDraft {
    pub topic: String,
    pub draft_text: String,
    pub source_feedback_id: String,
}

/// Request body for changing a task's status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStatusUpdate {
    pub status: TaskStatus,
}

/// Everything one synthesis pass produced for a batch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisOutput {
    pub insights: Vec<Insight>,
    pub tasks_to_create: Vec<TaskTicket>,
    pub drafted_responses: Vec<AITextDraft>,
}

impl SynthesisOutput {
    pub fn is_empty(&self) -> bool {
        self.insights.is_empty()
            && self.tasks_to_create.is_empty()
            && self.drafted_responses.is_empty()
    }
}
