use reqwest::StatusCode;
use thiserror::Error;

use crate::data::FALLBACK_WARNING;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("API reported success=false")]
    Unsuccessful,

    #[error("HTTP client unavailable: {0}")]
    ClientUnavailable(String),
}

impl AppError {
    /// Every remote failure collapses into the same warning; causes are only
    /// visible in the logs.
    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::Network(_)
            | AppError::Api { .. }
            | AppError::Serialization(_)
            | AppError::Unsuccessful
            | AppError::ClientUnavailable(_) => FALLBACK_WARNING.to_string(),
        }
    }
}
