mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
mod workflow;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use reqwest::Client;

use crate::config::AppConfig;
use crate::context::AppContext;
use crate::domain::ticket::TicketRequest;
use crate::error::{AppError, AppResult};
use crate::infra::jira::JiraClient;
use crate::infra::llm::GeminiClient;
use crate::services::{IssueTrackerService, LanguageModelService};
use crate::workflow::ticket::{self, TicketOptions, TicketOutcome};

#[derive(Parser)]
#[command(
    name = "tix",
    author,
    version,
    about = "Generate and file Jira tickets from a short description"
)]
struct Cli {
    /// Ticket type: Bug, Task or Story.
    #[arg(long = "type", value_name = "TYPE")]
    ticket_type: String,

    /// Ticket priority: Lowest, Low, Medium, High or Highest.
    #[arg(long, value_name = "PRIORITY")]
    priority: String,

    /// Free-text description of the work or the problem.
    #[arg(long, value_name = "TEXT")]
    input: String,

    /// Print the Jira payload without creating the ticket.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let config = AppConfig::from_env()?;
    let request = TicketRequest::new(&cli.ticket_type, &cli.priority, cli.input)?;

    let http = build_http_client(config.http_timeout)?;
    let language_model: Arc<dyn LanguageModelService> = Arc::new(GeminiClient::new(
        http.clone(),
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
    ));
    let issue_tracker: Arc<dyn IssueTrackerService> = Arc::new(JiraClient::new(
        http,
        config.jira_base_url.clone(),
        config.jira_email.clone(),
        config.jira_api_token.clone(),
    ));
    let context = AppContext::new(config, issue_tracker, language_model);

    let options = TicketOptions {
        dry_run: cli.dry_run,
    };
    match ticket::run(&context, request, options).await? {
        TicketOutcome::Created(ticket) => {
            println!("Key: {}", ticket.key);
            println!("URL: {}", ticket.url);
        }
        TicketOutcome::Preview(payload) => println!("{payload}"),
    }

    Ok(())
}

fn build_http_client(timeout: Option<Duration>) -> AppResult<Client> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|err| AppError::Configuration(format!("failed to build HTTP client: {err}")))
}
