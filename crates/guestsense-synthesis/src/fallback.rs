use guestsense_core::{
    AITextDraft, Insight, Priority, Sentiment, SynthesisOutput, TaskStatus, TaskTicket,
};

/// Back-reference used by fallback records, which have no originating feedback
pub const FALLBACK_SOURCE_ID: &str = "system-err";

const FALLBACK_INSIGHT: &str = "System currently using fallback data due to AI load.";
const FALLBACK_TASK_SUMMARY: &str = "Check AI API Status";
const FALLBACK_DRAFT_TOPIC: &str = "System Notice";
const FALLBACK_DRAFT_TEXT: &str =
    "Our AI is currently busy, but we have logged your feedback manually.";

/// The fixed payload returned whenever the model cannot be used.
///
/// `reason` is embedded in the task details so operators can see what failed.
pub fn fallback_output(reason: &str) -> SynthesisOutput {
    SynthesisOutput {
        insights: vec![Insight {
            id: String::new(),
            text: FALLBACK_INSIGHT.to_string(),
            sentiment: Sentiment::Neutral,
        }],
        tasks_to_create: vec![TaskTicket {
            task_id: String::new(),
            summary: FALLBACK_TASK_SUMMARY.to_string(),
            details: format!("The AI model reported: {}", reason),
            priority: Priority::Medium,
            status: TaskStatus::Pending,
            source_feedback_id: FALLBACK_SOURCE_ID.to_string(),
        }],
        drafted_responses: vec![AITextDraft {
            topic: FALLBACK_DRAFT_TOPIC.to_string(),
            draft_text: FALLBACK_DRAFT_TEXT.to_string(),
            source_feedback_id: FALLBACK_SOURCE_ID.to_string(),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_shape() {
        let output = fallback_output("503 overloaded");

        assert_eq!(output.insights.len(), 1);
        assert_eq!(output.insights[0].sentiment, Sentiment::Neutral);

        assert_eq!(output.tasks_to_create.len(), 1);
        let task = &output.tasks_to_create[0];
        assert_eq!(task.summary, "Check AI API Status");
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.source_feedback_id, FALLBACK_SOURCE_ID);
        assert!(task.details.contains("503 overloaded"));

        assert_eq!(output.drafted_responses.len(), 1);
        let draft = &output.drafted_responses[0];
        assert_eq!(draft.topic, "System Notice");
        assert_eq!(draft.source_feedback_id, FALLBACK_SOURCE_ID);
    }

    #[test]
    fn test_fallback_is_schema_valid() {
        let json = serde_json::to_string(&fallback_output("boom")).unwrap();
        let parsed: SynthesisOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, fallback_output("boom"));
    }
}
