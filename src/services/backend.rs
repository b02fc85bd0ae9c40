// src/services/backend.rs
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::BackendError;

/// Body of `POST /api/generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
    pub options: GenerateOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_predict: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub model: String,
    pub response: String,
    #[serde(default)]
    pub done: bool,
}

#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
    timeout: Duration,
}

impl BackendClient {
    pub fn new(http: Client, base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url, timeout }
    }

    pub fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url)
    }

    pub async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, BackendError> {
        let response = self
            .http
            .post(self.generate_url())
            .timeout(self.timeout)
            .json(request)
            .send()
            .await
            .map_err(BackendError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(err) => {
                    tracing::debug!(%status, error = %err, "failed to read backend error body");
                    String::new()
                }
            };
            return Err(BackendError::Status { status: status.as_u16(), body });
        }

        let bytes = response.bytes().await.map_err(BackendError::Read)?;
        serde_json::from_slice(&bytes).map_err(BackendError::Parse)
    }
}
