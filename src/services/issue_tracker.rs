use async_trait::async_trait;

use crate::domain::ticket::{CreatedTicket, GeneratedContent, TicketRequest};
use crate::error::AppResult;

#[async_trait]
pub trait IssueTrackerService: Send + Sync {
    async fn create_issue(
        &self,
        project_key: &str,
        request: &TicketRequest,
        content: &GeneratedContent,
    ) -> AppResult<CreatedTicket>;

    /// Renders the creation payload without sending it, for dry runs.
    fn preview_issue(
        &self,
        project_key: &str,
        request: &TicketRequest,
        content: &GeneratedContent,
    ) -> AppResult<String>;
}
