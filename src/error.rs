use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("generation error: {0}")]
    Generation(String),
    #[error("submission error: {0}")]
    Submission(String),
}

pub type AppResult<T> = Result<T, AppError>;
