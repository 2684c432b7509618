use crate::llm::prompts;
use crate::llm::ChatMessage;

/// Assemble the summarization request.
///
/// Segment order is fixed: instruction, branch name, commit/diff payload,
/// then the ticket reference. The payload segment is always present, even
/// when the range text is empty; the ticket segment is omitted entirely when
/// no ticket was given. The payload is included verbatim, as opaque text.
pub fn pr_summary_messages(
    additional_prompt: &str,
    jira_ticket: &str,
    branch: &str,
    range_text: &str,
) -> Vec<ChatMessage> {
    let mut instruction = prompts::SUMMARY_INSTRUCTIONS.to_owned();
    if !additional_prompt.is_empty() {
        instruction.push(' ');
        instruction.push_str(additional_prompt);
    }

    let mut messages = vec![
        ChatMessage::user(instruction),
        ChatMessage::user(format!("Branch Name: {branch}")),
        ChatMessage::user(format!("Commit Messages with Diffs: {range_text}")),
    ];

    if !jira_ticket.is_empty() {
        messages.push(ChatMessage::user(format!("JIRA Ticket: {jira_ticket}")));
    }

    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_segments_when_ticket_is_given() {
        let messages = pr_summary_messages("", "PROJ-42", "feature/x", "one commit");
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[3].content, "JIRA Ticket: PROJ-42");
    }

    #[test]
    fn three_segments_when_ticket_is_omitted() {
        let messages = pr_summary_messages("", "", "feature/x", "one commit");
        assert_eq!(messages.len(), 3);
    }

    #[test]
    fn segments_keep_their_order() {
        let messages = pr_summary_messages("focus on tests", "PROJ-7", "fix/leak", "payload");
        assert!(messages[0].content.starts_with("Generate a PR title"));
        assert!(messages[0].content.ends_with("focus on tests"));
        assert_eq!(messages[1].content, "Branch Name: fix/leak");
        assert_eq!(messages[2].content, "Commit Messages with Diffs: payload");
        assert_eq!(messages[3].content, "JIRA Ticket: PROJ-7");
        assert!(messages.iter().all(|m| m.role == "user"));
    }

    #[test]
    fn additional_prompt_is_space_separated() {
        let messages = pr_summary_messages("extra", "", "b", "t");
        assert!(messages[0].content.contains("**Be concise.** extra"));
    }

    #[test]
    fn empty_payload_still_gets_a_segment() {
        let messages = pr_summary_messages("", "", "feature/x", "");
        assert_eq!(messages[2].content, "Commit Messages with Diffs: ");
    }

    #[test]
    fn identical_inputs_build_identical_requests() {
        let a = pr_summary_messages("p", "T-1", "branch", "text");
        let b = pr_summary_messages("p", "T-1", "branch", "text");
        assert_eq!(a, b);
    }
}
