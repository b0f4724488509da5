use axum::http::StatusCode;
use serde_json::Value;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum MediaApiError {
    MissingApiKey,
    PromptRequired,
    GenerationFailed(Value),
}

impl MediaApiError {
    pub fn value(self) -> ApiError {
        match self {
            Self::MissingApiKey => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Backend missing API key".to_string(),
                details: None,
            },
            Self::PromptRequired => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Prompt is required".to_string(),
                details: None,
            },
            Self::GenerationFailed(details) => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Image generation failed".to_string(),
                details: Some(details),
            },
        }
    }
}
