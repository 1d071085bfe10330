use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::ledger::LedgerError;

/// Errors surfaced by the HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Username and password are required!")]
    MissingCredentials,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("User not found")]
    UserNotFound,

    #[error("Missing text or target_lang in the request body")]
    MissingTranslationFields,

    #[error("An error occurred during translation: {0}")]
    Translation(String),

    #[error("Invalid amount")]
    InvalidAmount,

    #[error("Amount should be less than Balance")]
    InsufficientBalance,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::MissingCredentials
            | Self::MissingTranslationFields
            | Self::InvalidAmount
            | Self::InsufficientBalance => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::Translation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Translation errors go out under an "error" key, everything else
        // under "message" - the wire format clients already depend on.
        let body = match &self {
            Self::MissingTranslationFields | Self::Translation(_) => {
                json!({ "error": self.to_string() })
            }
            _ => json!({ "message": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InvalidAmount => Self::InvalidAmount,
            LedgerError::InsufficientBalance => Self::InsufficientBalance,
        }
    }
}
