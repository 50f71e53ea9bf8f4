use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::services::LanguageModelService;

const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
const API_KEY_HEADER: &str = "x-goog-api-key";
const MAX_OUTPUT_TOKENS: u32 = 1024;

pub struct GeminiClient {
    http: Client,
    api_key: String,
    model: String,
    api_base: String,
}

impl GeminiClient {
    pub fn new(http: Client, api_key: String, model: String) -> Self {
        Self {
            http,
            api_key,
            model,
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl LanguageModelService for GeminiClient {
    async fn complete(&self, prompt: &str) -> AppResult<String> {
        debug!(model = %self.model, "requesting completion");

        let request_body = GenerateContentRequest::user_message(prompt);
        let response = self
            .http
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|err| AppError::Generation(format!("failed to call Gemini: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(AppError::Generation(format!(
                "Gemini responded with {status}: {body}"
            )));
        }

        let payload: GenerateContentResponse = response.json().await.map_err(|err| {
            AppError::Generation(format!("failed to parse Gemini response: {err}"))
        })?;

        let text = payload.completion_text();
        if text.is_empty() {
            return Err(AppError::Generation(
                "Gemini reply contained no completion text".to_string(),
            ));
        }
        Ok(text)
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    fn user_message(text: &str) -> Self {
        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![Part {
                    text: text.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        }
    }
}

#[derive(Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    fn completion_text(&self) -> String {
        self.candidates
            .first()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}
