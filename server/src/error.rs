use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde::Serialize;

use crate::auth_token::TokenError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Authentication required")]
    Unauthorized(TokenError),

    #[error("Token error: {0}")]
    Token(TokenError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal server error")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Token(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let error = match self {
            ApiError::Unauthorized(_) => self.to_string(),
            other => {
                // Internal details stay in the logs.
                log::error!("Request failed: {:?}", other);
                "Internal server error".to_string()
            }
        };
        let error_response = ErrorResponse {
            success: false,
            error,
        };

        HttpResponse::build(status).json(error_response)
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
