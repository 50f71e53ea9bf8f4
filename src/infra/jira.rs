use async_trait::async_trait;
use base64::prelude::{BASE64_STANDARD, Engine as _};
use reqwest::{
    Client,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::ticket::{CreatedTicket, GeneratedContent, TicketRequest};
use crate::error::{AppError, AppResult};
use crate::services::IssueTrackerService;

pub struct JiraClient {
    http: Client,
    base_url: String,
    email: String,
    token: String,
}

impl JiraClient {
    pub fn new(http: Client, base_url: String, email: String, token: String) -> Self {
        Self {
            http,
            base_url,
            email,
            token,
        }
    }

    fn auth_header(&self) -> String {
        let credentials = format!("{}:{}", self.email, self.token);
        let encoded = BASE64_STANDARD.encode(credentials);
        format!("Basic {encoded}")
    }

    fn issue_endpoint(&self) -> String {
        format!("{}/rest/api/3/issue", self.base_url.trim_end_matches('/'))
    }

    fn browse_url(&self, key: &str) -> String {
        format!("{}/browse/{}", self.base_url.trim_end_matches('/'), key)
    }

    fn request_body(
        project_key: &str,
        request: &TicketRequest,
        content: &GeneratedContent,
    ) -> CreateIssueRequest {
        CreateIssueRequest {
            fields: CreateIssueFields {
                project: ProjectRef {
                    key: project_key.to_string(),
                },
                summary: content.summary.clone(),
                description: content.combined_description(),
                issuetype: IssueTypeRef {
                    name: request.ticket_type.as_str().to_string(),
                },
                priority: PriorityRef {
                    name: request.priority.as_str().to_string(),
                },
            },
        }
    }
}

#[async_trait]
impl IssueTrackerService for JiraClient {
    async fn create_issue(
        &self,
        project_key: &str,
        request: &TicketRequest,
        content: &GeneratedContent,
    ) -> AppResult<CreatedTicket> {
        debug!(project_key, issue_type = request.ticket_type.as_str(), "creating Jira issue");

        let request_body = Self::request_body(project_key, request, content);
        let response = self
            .http
            .post(self.issue_endpoint())
            .header(AUTHORIZATION, self.auth_header())
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|err| AppError::Submission(format!("failed to call Jira: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(AppError::Submission(format!(
                "Jira responded with {status}: {body}"
            )));
        }

        let payload: CreateIssueResponse = response.json().await.map_err(|err| {
            AppError::Submission(format!("failed to parse Jira response: {err}"))
        })?;

        debug!(key = %payload.key, "issue created");
        let url = self.browse_url(&payload.key);
        Ok(CreatedTicket {
            key: payload.key,
            url,
        })
    }

    fn preview_issue(
        &self,
        project_key: &str,
        request: &TicketRequest,
        content: &GeneratedContent,
    ) -> AppResult<String> {
        let request_body = Self::request_body(project_key, request, content);
        serde_json::to_string_pretty(&request_body)
            .map_err(|err| AppError::Submission(format!("failed to render payload: {err}")))
    }
}

#[derive(Serialize)]
struct CreateIssueRequest {
    fields: CreateIssueFields,
}

#[derive(Serialize)]
struct CreateIssueFields {
    project: ProjectRef,
    summary: String,
    description: String,
    issuetype: IssueTypeRef,
    priority: PriorityRef,
}

#[derive(Serialize)]
struct ProjectRef {
    key: String,
}

#[derive(Serialize)]
struct IssueTypeRef {
    name: String,
}

#[derive(Serialize)]
struct PriorityRef {
    name: String,
}

#[derive(Deserialize)]
struct CreateIssueResponse {
    key: String,
}
