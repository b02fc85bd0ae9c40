// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::{ErrorBody, ErrorDetail};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request body")]
    InvalidBody(#[source] serde_json::Error),

    #[error("Messages array is empty")]
    EmptyMessages,

    #[error("Model is required")]
    MissingModel,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Error calling backend API: {0}")]
    Backend(#[from] BackendError),
}

/// Failures talking to the generate backend.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("failed to connect to backend: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("backend API error (status {status}): {body}")]
    Status { status: u16, body: String },

    #[error("failed to read response: {0}")]
    Read(#[source] reqwest::Error),

    #[error("failed to parse response: {0}")]
    Parse(#[source] serde_json::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidBody(_) | AppError::EmptyMessages | AppError::MissingModel => {
                StatusCode::BAD_REQUEST
            }
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Backend(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Backend(_) => "server_error",
            _ => "invalid_request_error",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidBody(_) => "invalid_body",
            AppError::EmptyMessages => "invalid_messages",
            AppError::MissingModel => "invalid_model",
            AppError::MethodNotAllowed => "method_not_allowed",
            AppError::Backend(_) => "internal_error",
        }
    }

    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            error: ErrorDetail {
                message: self.to_string(),
                kind: self.kind().to_string(),
                code: self.code().to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(code = self.code(), error = %self, "request failed");
        } else {
            match &self {
                AppError::InvalidBody(source) => {
                    tracing::warn!(code = self.code(), %source, "rejected request");
                }
                _ => tracing::warn!(code = self.code(), error = %self, "rejected request"),
            }
        }

        (status, Json(self.body())).into_response()
    }
}
