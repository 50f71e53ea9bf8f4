use async_trait::async_trait;

use crate::error::AppResult;

#[async_trait]
pub trait LanguageModelService: Send + Sync {
    /// Returns the raw completion text for a prompt.
    async fn complete(&self, prompt: &str) -> AppResult<String>;
}
