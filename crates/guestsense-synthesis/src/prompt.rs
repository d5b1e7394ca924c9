use guestsense_core::RawFeedback;

/// Separator placed between feedback items in the prompt
pub const FEEDBACK_DELIMITER: &str = "\n---\n";

const INSTRUCTIONS: &str = "Analyze the following guest feedback for a hospitality operations team.\n\
1. Identify recurring operational failures and report them as `insights`, each with a \
sentiment of Positive, Neutral or Negative.\n\
2. Propose follow-up work as `tasks_to_create`, each with a summary, details, a priority of \
Critical, High, Medium or Low, status Pending, and the source_feedback_id of the feedback \
that prompted it.\n\
3. Draft replies to negative feedback as `drafted_responses`, each with a topic, draft_text \
and source_feedback_id.\n\
Respond with JSON only, matching the provided schema exactly.";

/// Render one feedback item as `ID <id>: <text>`
fn feedback_line(item: &RawFeedback) -> String {
    format!("ID {}: {}", item.id().unwrap_or_default(), item.text)
}

pub fn build_synthesis_prompt(batch: &[RawFeedback]) -> String {
    let block = batch
        .iter()
        .map(feedback_line)
        .collect::<Vec<_>>()
        .join(FEEDBACK_DELIMITER);
    format!("{}\n\nFeedback:\n{}", INSTRUCTIONS, block)
}
