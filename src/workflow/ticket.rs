use serde::Deserialize;

use crate::context::AppContext;
use crate::domain::prompt::build_prompt;
use crate::domain::ticket::{CreatedTicket, GeneratedContent, TicketRequest};
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct TicketOptions {
    pub dry_run: bool,
}

#[derive(Debug)]
pub enum TicketOutcome {
    Created(CreatedTicket),
    Preview(String),
}

/// Runs the pipeline once: draft content with the language model, then file
/// the ticket. Any stage error aborts the run; nothing is retried.
pub async fn run(
    ctx: &AppContext,
    request: TicketRequest,
    options: TicketOptions,
) -> AppResult<TicketOutcome> {
    let prompt = build_prompt(&request);
    let raw_reply = ctx.language_model.complete(&prompt).await?;
    let content = parse_generated(&raw_reply)?;

    let project_key = ctx.config.jira_project_key.as_str();
    if options.dry_run {
        let payload = ctx
            .issue_tracker
            .preview_issue(project_key, &request, &content)?;
        return Ok(TicketOutcome::Preview(payload));
    }

    let ticket = ctx
        .issue_tracker
        .create_issue(project_key, &request, &content)
        .await?;
    Ok(TicketOutcome::Created(ticket))
}

#[derive(Deserialize)]
struct ModelReply {
    summary: Option<String>,
    description: Option<String>,
    #[serde(rename = "acceptanceCriteria")]
    acceptance_criteria: Option<String>,
}

/// Parses the model reply strictly as JSON. Model output is
/// non-deterministic, so a bad reply is reported back to the user instead of
/// being retried.
fn parse_generated(raw: &str) -> AppResult<GeneratedContent> {
    let reply: ModelReply = serde_json::from_str(raw.trim()).map_err(|err| {
        AppError::Generation(format!(
            "model reply was not valid JSON ({err}); run the command again"
        ))
    })?;

    Ok(GeneratedContent {
        summary: required_field("summary", reply.summary)?,
        description: required_field("description", reply.description)?,
        acceptance_criteria: required_field("acceptanceCriteria", reply.acceptance_criteria)?,
    })
}

fn required_field(name: &str, value: Option<String>) -> AppResult<String> {
    value
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| {
            AppError::Generation(format!(
                "model reply is missing a non-empty '{name}' field; run the command again"
            ))
        })
}
