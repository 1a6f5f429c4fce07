use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("{0}")]
    ExternalServiceError(String),

    #[error("GEMINI_API_KEY is not configured")]
    MissingApiKey,

    #[error("Invalid keyword pattern `{keyword}`: {reason}")]
    InvalidKeyword { keyword: String, reason: String },
}
