//! Response schema handed to the model so its output parses as `SynthesisOutput`

use serde_json::{json, Value};

pub fn synthesis_output_schema() -> Value {
    let insight = json!({
        "type": "OBJECT",
        "properties": {
            "text": { "type": "STRING" },
            "sentiment": { "type": "STRING", "enum": ["Positive", "Neutral", "Negative"] }
        },
        "required": ["text", "sentiment"]
    });
    let task = json!({
        "type": "OBJECT",
        "properties": {
            "summary": { "type": "STRING" },
            "details": { "type": "STRING" },
            "priority": { "type": "STRING", "enum": ["Critical", "High", "Medium", "Low"] },
            "status": { "type": "STRING", "enum": ["Pending", "In Progress", "Complete"] },
            "source_feedback_id": { "type": "STRING" }
        },
        "required": ["summary", "details", "priority", "status", "source_feedback_id"]
    });
    let draft = json!({
        "type": "OBJECT",
        "properties": {
            "topic": { "type": "STRING" },
            "draft_text": { "type": "STRING" },
            "source_feedback_id": { "type": "STRING" }
        },
        "required": ["topic", "draft_text", "source_feedback_id"]
    });

    json!({
        "type": "OBJECT",
        "properties": {
            "insights": { "type": "ARRAY", "items": insight },
            "tasks_to_create": { "type": "ARRAY", "items": task },
            "drafted_responses": { "type": "ARRAY", "items": draft }
        },
        "required": ["insights", "tasks_to_create", "drafted_responses"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_requires_all_sections() {
        let schema = synthesis_output_schema();
        let required: Vec<_> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert_eq!(required, vec!["insights", "tasks_to_create", "drafted_responses"]);
    }

    #[test]
    fn test_schema_enums_match_domain_labels() {
        let schema = synthesis_output_schema();
        let task = &schema["properties"]["tasks_to_create"]["items"]["properties"];
        for label in task["priority"]["enum"].as_array().unwrap() {
            assert!(serde_json::from_value::<guestsense_core::Priority>(label.clone()).is_ok());
        }
        for label in task["status"]["enum"].as_array().unwrap() {
            assert!(serde_json::from_value::<guestsense_core::TaskStatus>(label.clone()).is_ok());
        }

        let insight = &schema["properties"]["insights"]["items"]["properties"];
        for label in insight["sentiment"]["enum"].as_array().unwrap() {
            assert!(serde_json::from_value::<guestsense_core::Sentiment>(label.clone()).is_ok());
        }
    }
}
