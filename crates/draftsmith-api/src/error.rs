use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use draftsmith_generator::GenerateError;
use draftsmith_types::api::ErrorResponse;
use draftsmith_types::validation::ValidationIssue;

#[derive(Debug, Error)]
pub enum ApiError {
    /// 400 with field-level detail.
    #[error("{message}")]
    Validation {
        message: &'static str,
        issues: Vec<ValidationIssue>,
    },

    #[error("{0}")]
    BadRequest(&'static str),

    #[error("{0}")]
    NotFound(&'static str),

    /// 500. `detail` is logged, never sent to the client.
    #[error("{message}: {detail}")]
    Storage {
        message: &'static str,
        detail: String,
    },

    /// 500. The provider's message is passed through to the client.
    #[error("Failed to generate design: {0}")]
    Generation(#[from] GenerateError),
}

impl ApiError {
    pub fn storage(message: &'static str, detail: impl Into<String>) -> Self {
        Self::Storage {
            message,
            detail: detail.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Storage { .. } | Self::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Validation { message, issues } => {
                warn!("{} ({} issues)", message, issues.len());
                ErrorResponse {
                    message: message.into(),
                    errors: Some(issues),
                    error: None,
                }
            }
            Self::BadRequest(message) | Self::NotFound(message) => ErrorResponse::message(message),
            Self::Storage { message, detail } => {
                error!("{}: {}", message, detail);
                ErrorResponse::message(message)
            }
            Self::Generation(e) => {
                error!("Error generating design: {}", e);
                ErrorResponse {
                    message: "Failed to generate design".into(),
                    errors: None,
                    error: Some(e.to_string()),
                }
            }
        };

        (status, Json(body)).into_response()
    }
}
