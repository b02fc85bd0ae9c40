// src/services/translator.rs
//! Front (chat-completion) <-> back (generate) schema translation.

use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::AppError,
    message::{ChatMessage, ChatRequest, ChatResponse, Choice, Usage},
    services::backend::{BackendClient, GenerateOptions, GenerateRequest},
};

const ID_PREFIX: &str = "chatcmpl-";
const ID_SUFFIX_LEN: usize = 10;
const CHARS_PER_TOKEN: usize = 4;

pub fn parse_request(body: &[u8]) -> Result<ChatRequest, AppError> {
    serde_json::from_slice(body).map_err(AppError::InvalidBody)
}

/// Message list is checked before model.
pub fn validate(request: &ChatRequest) -> Result<(), AppError> {
    if request.messages.is_empty() {
        return Err(AppError::EmptyMessages);
    }
    if request.model.is_empty() {
        return Err(AppError::MissingModel);
    }
    Ok(())
}

/// Joins messages as `"<role>: <content>\n"` lines, in order, unescaped.
pub fn flatten_messages(messages: &[ChatMessage]) -> String {
    messages.iter().fold(String::new(), |mut prompt, msg| {
        prompt.push_str(&msg.role);
        prompt.push_str(": ");
        prompt.push_str(&msg.content);
        prompt.push('\n');
        prompt
    })
}

/// Zero, negative and missing values all map to `None`.
pub fn sampling_options(temperature: Option<f64>, max_tokens: Option<i64>) -> GenerateOptions {
    GenerateOptions {
        temperature: temperature.filter(|t| *t > 0.0),
        num_predict: max_tokens.filter(|n| *n > 0),
    }
}

pub fn build_generate_request(request: &ChatRequest, prompt: String) -> GenerateRequest {
    GenerateRequest {
        model: request.model.clone(),
        prompt,
        // single-shot only; a streamed backend reply is NDJSON, not one object
        stream: false,
        options: sampling_options(request.temperature, request.max_tokens),
    }
}

/// Rough `len / 4` byte heuristic, not a tokenizer count.
pub fn estimate_tokens(text: &str) -> usize {
    text.len() / CHARS_PER_TOKEN
}

pub fn completion_id() -> String {
    let suffix: String = Uuid::new_v4().simple().to_string().chars().take(ID_SUFFIX_LEN).collect();
    format!("{ID_PREFIX}{suffix}")
}

pub fn build_chat_response(model: &str, prompt: &str, completion: String) -> ChatResponse {
    let prompt_tokens = estimate_tokens(prompt);
    let completion_tokens = estimate_tokens(&completion);

    ChatResponse {
        id: completion_id(),
        object: "chat.completion".to_string(),
        created: Utc::now().timestamp(),
        model: model.to_string(),
        choices: vec![Choice {
            index: 0,
            message: ChatMessage::new("assistant", completion),
            finish_reason: "stop".to_string(),
        }],
        usage: Usage {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens + completion_tokens,
        },
    }
}

/// Validate, call the backend once, and shape the reply.
pub async fn translate(backend: &BackendClient, request: ChatRequest) -> Result<ChatResponse, AppError> {
    validate(&request)?;

    if request.stream {
        tracing::warn!(model = %request.model, "stream=true requested; returning a single response");
    }

    let prompt = flatten_messages(&request.messages);
    tracing::debug!(
        model = %request.model,
        messages = request.messages.len(),
        prompt_len = prompt.len(),
        "forwarding chat completion"
    );

    let generate = build_generate_request(&request, prompt);
    let reply = backend.generate(&generate).await?;

    Ok(build_chat_response(&generate.model, &generate.prompt, reply.response))
}
