use crate::domain::ticket::{TicketRequest, TicketType};

/// Builds the completion prompt for a ticket request. The reply contract is
/// fixed: one JSON object with the keys `summary`, `description` and
/// `acceptanceCriteria`.
pub fn build_prompt(request: &TicketRequest) -> String {
    let mut prompt = format!(
        "You are drafting a {} ticket for a software project issue tracker.\n\n\
         Priority: {}\n\
         Request: {}\n\n\
         Reply with a single JSON object containing exactly these keys:\n\
         - \"summary\": a one-line ticket title\n\
         - \"description\": a detailed description of the work\n\
         - \"acceptanceCriteria\": the conditions under which the ticket counts as done\n",
        request.ticket_type.as_str(),
        request.priority.as_str(),
        request.free_text,
    );

    if request.ticket_type == TicketType::Bug {
        prompt.push_str(
            "In \"description\", document the actual behaviour versus the expected behaviour.\n",
        );
    }

    prompt.push_str("Reply with the JSON object only, no markdown fences and no commentary.\n");
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ticket::TicketPriority;

    fn request(ticket_type: TicketType) -> TicketRequest {
        TicketRequest {
            ticket_type,
            priority: TicketPriority::High,
            free_text: "Login API returns 500 when token expires".to_string(),
        }
    }

    #[test]
    fn embeds_type_priority_and_free_text() {
        let prompt = build_prompt(&request(TicketType::Task));
        assert!(prompt.contains("a Task ticket"));
        assert!(prompt.contains("Priority: High"));
        assert!(prompt.contains("Request: Login API returns 500 when token expires"));
    }

    #[test]
    fn names_the_three_required_keys() {
        let prompt = build_prompt(&request(TicketType::Story));
        assert!(prompt.contains("\"summary\""));
        assert!(prompt.contains("\"description\""));
        assert!(prompt.contains("\"acceptanceCriteria\""));
    }

    #[test]
    fn bug_prompt_documents_actual_versus_expected() {
        let prompt = build_prompt(&request(TicketType::Bug));
        assert!(prompt.contains("actual behaviour versus the expected behaviour"));
    }

    #[test]
    fn task_and_story_prompts_omit_the_bug_step() {
        for ticket_type in [TicketType::Task, TicketType::Story] {
            let prompt = build_prompt(&request(ticket_type));
            assert!(!prompt.contains("actual behaviour versus the expected behaviour"));
        }
    }
}
