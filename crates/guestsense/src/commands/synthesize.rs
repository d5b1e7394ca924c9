use anyhow::Context;
use guestsense_api::AppState;
use guestsense_core::{RawFeedback, ServiceConfig, SynthesisOutput};
use std::path::Path;

/// Read feedback from a JSON array file, or one JSON object per line
fn load_feedback_file(path: &Path) -> anyhow::Result<Vec<RawFeedback>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    if content.trim_start().starts_with('[') {
        return serde_json::from_str(&content)
            .with_context(|| format!("invalid feedback array in {}", path.display()));
    }

    let mut batch = Vec::new();
    for (n, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let item = serde_json::from_str(line)
            .with_context(|| format!("invalid feedback record on line {}", n + 1))?;
        batch.push(item);
    }
    Ok(batch)
}

async fn synthesize_file(path: &Path, config: &ServiceConfig) -> anyhow::Result<SynthesisOutput> {
    let batch = load_feedback_file(path)?;
    let state = AppState::from_config(config);
    Ok(guestsense_api::ingest_and_synthesize(&state, batch).await?)
}

pub async fn run(path: &Path, config: &ServiceConfig) -> anyhow::Result<()> {
    let output = synthesize_file(path, config).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_json_array() {
        let file = write_temp(r#"[{"id":"f-1","text":"cold room"},{"text":"slow wifi"}]"#);
        let batch = load_feedback_file(file.path()).unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].id(), Some("f-1"));
        assert_eq!(batch[1].id(), None);
    }

    #[test]
    fn test_load_jsonl_skips_blank_lines() {
        let file = write_temp("{\"text\":\"cold room\"}\n\n{\"text\":\"slow wifi\"}\n");
        let batch = load_feedback_file(file.path()).unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[1].text, "slow wifi");
    }

    #[test]
    fn test_load_jsonl_reports_bad_line() {
        let file = write_temp("{\"text\":\"ok\"}\n{\"id\":\"f-2\"}\n");
        let err = load_feedback_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_feedback_file(Path::new("/nonexistent/feedback.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[tokio::test]
    async fn test_synthesize_without_api_key_uses_fallback() {
        let file = write_temp(r#"[{"text":"The elevator was out of order"}]"#);
        let output = synthesize_file(file.path(), &ServiceConfig::new())
            .await
            .unwrap();
        assert_eq!(output.tasks_to_create.len(), 1);
        assert_eq!(output.tasks_to_create[0].summary, "Check AI API Status");
        assert!(!output.tasks_to_create[0].task_id.is_empty());
    }

    #[tokio::test]
    async fn test_synthesize_empty_file_is_rejected() {
        let file = write_temp("[]");
        let err = synthesize_file(file.path(), &ServiceConfig::new())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("cannot be empty"));
    }
}
