use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketType {
    Bug,
    Task,
    Story,
}

impl TicketType {
    pub const ALL: [TicketType; 3] = [TicketType::Bug, TicketType::Task, TicketType::Story];

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketType::Bug => "Bug",
            TicketType::Task => "Task",
            TicketType::Story => "Story",
        }
    }

    pub fn parse(value: &str) -> AppResult<Self> {
        match value.trim() {
            "Bug" => Ok(TicketType::Bug),
            "Task" => Ok(TicketType::Task),
            "Story" => Ok(TicketType::Story),
            other => Err(AppError::Validation(format!(
                "unknown ticket type '{other}' (expected one of: Bug, Task, Story)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketPriority {
    Lowest,
    Low,
    Medium,
    High,
    Highest,
}

impl TicketPriority {
    pub const ALL: [TicketPriority; 5] = [
        TicketPriority::Lowest,
        TicketPriority::Low,
        TicketPriority::Medium,
        TicketPriority::High,
        TicketPriority::Highest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketPriority::Lowest => "Lowest",
            TicketPriority::Low => "Low",
            TicketPriority::Medium => "Medium",
            TicketPriority::High => "High",
            TicketPriority::Highest => "Highest",
        }
    }

    pub fn parse(value: &str) -> AppResult<Self> {
        match value.trim() {
            "Lowest" => Ok(TicketPriority::Lowest),
            "Low" => Ok(TicketPriority::Low),
            "Medium" => Ok(TicketPriority::Medium),
            "High" => Ok(TicketPriority::High),
            "Highest" => Ok(TicketPriority::Highest),
            other => Err(AppError::Validation(format!(
                "unknown priority '{other}' (expected one of: Lowest, Low, Medium, High, Highest)"
            ))),
        }
    }
}

/// Validated user input for one ticket. Immutable once built.
#[derive(Debug, Clone)]
pub struct TicketRequest {
    pub ticket_type: TicketType,
    pub priority: TicketPriority,
    pub free_text: String,
}

impl TicketRequest {
    pub fn new(ticket_type: &str, priority: &str, free_text: String) -> AppResult<Self> {
        let ticket_type = TicketType::parse(ticket_type)?;
        let priority = TicketPriority::parse(priority)?;
        if free_text.trim().is_empty() {
            return Err(AppError::Validation(
                "input text must not be empty".to_string(),
            ));
        }
        Ok(Self {
            ticket_type,
            priority,
            free_text,
        })
    }
}

/// The model's reply, already checked to hold three non-empty fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedContent {
    pub summary: String,
    pub description: String,
    pub acceptance_criteria: String,
}

impl GeneratedContent {
    /// Jira's description field is a single string, so the acceptance
    /// criteria are appended under a fixed header.
    pub fn combined_description(&self) -> String {
        format!(
            "{}\n\nAcceptance Criteria:\n{}",
            self.description, self.acceptance_criteria
        )
    }
}

#[derive(Debug, Clone)]
pub struct CreatedTicket {
    pub key: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_recognized_type_and_priority() {
        for ticket_type in TicketType::ALL {
            assert_eq!(TicketType::parse(ticket_type.as_str()).unwrap(), ticket_type);
        }
        for priority in TicketPriority::ALL {
            assert_eq!(
                TicketPriority::parse(priority.as_str()).unwrap(),
                priority
            );
        }
    }

    #[test]
    fn rejects_unknown_and_miscased_values() {
        for value in ["Epic", "bug", "BUG", ""] {
            let error = TicketType::parse(value).unwrap_err();
            assert!(
                matches!(&error, AppError::Validation(message) if message.contains("Bug, Task, Story")),
                "expected validation error for '{value}', got: {error}"
            );
        }
        for value in ["Urgent", "high", ""] {
            let error = TicketPriority::parse(value).unwrap_err();
            assert!(matches!(&error, AppError::Validation(message)
                if message.contains("Lowest, Low, Medium, High, Highest")));
        }
    }

    #[test]
    fn rejects_empty_free_text() {
        let error = TicketRequest::new("Bug", "High", "   ".to_string()).unwrap_err();
        assert!(matches!(error, AppError::Validation(_)));
    }

    #[test]
    fn builds_request_from_valid_input() {
        let request = TicketRequest::new("Story", "Medium", "Add dark mode".to_string()).unwrap();
        assert_eq!(request.ticket_type, TicketType::Story);
        assert_eq!(request.priority, TicketPriority::Medium);
        assert_eq!(request.free_text, "Add dark mode");
    }

    #[test]
    fn combines_description_under_acceptance_criteria_header() {
        let content = GeneratedContent {
            summary: "Fix login".to_string(),
            description: "The login API fails.".to_string(),
            acceptance_criteria: "1. Login succeeds.".to_string(),
        };
        assert_eq!(
            content.combined_description(),
            "The login API fails.\n\nAcceptance Criteria:\n1. Login succeeds."
        );
    }
}
