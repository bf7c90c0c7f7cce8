//! GeminiClient - Direct REST API backend for Gemini.
//!
//! Calls the Gemini `generateContent` REST API with the fixed persona as
//! system instruction. Configuration comes from the process environment.

use crate::client::CompletionBackend;
use crate::config::GeminiConfig;
use async_trait::async_trait;
use folio_core::FolioError;
use folio_core::error::Result;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";
const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Fixed sampling temperature: deterministic-enough but not greedy.
const SAMPLING_TEMPERATURE: f64 = 0.7;

/// Upper bound on a single attempt, so a hung remote call cannot hold the
/// session's pending gate closed indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Completion backend that talks to the Gemini HTTP API.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    system_instruction: Option<String>,
}

impl GeminiClient {
    /// Creates a new backend with the provided API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: Some(api_key.into()),
            model: model.into(),
            system_instruction: None,
        }
    }

    /// Builds a backend from the process environment.
    ///
    /// A missing `GEMINI_API_KEY` still yields a backend; every call on it
    /// fails with a `Config` error and lands in the absorbed-failure path.
    pub fn from_env() -> Self {
        let config = GeminiConfig::from_env();
        Self {
            client: Client::new(),
            api_key: config.api_key,
            model: config.model,
            system_instruction: None,
        }
    }

    /// Overrides the model after construction.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Adds a system instruction that will be sent alongside every request.
    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    /// Builds the request body for one utterance.
    ///
    /// The body carries only the fixed system instruction and this
    /// utterance; prior turns are never included.
    fn build_request(&self, utterance: &str) -> GenerateContentRequest {
        let contents = vec![Content {
            role: "user".to_string(),
            parts: vec![Part {
                text: utterance.to_string(),
            }],
        }];

        let system_instruction = self.system_instruction.as_ref().map(|text| Content {
            role: "system".to_string(),
            parts: vec![Part {
                text: text.to_string(),
            }],
        });

        GenerateContentRequest {
            contents,
            system_instruction,
            generation_config: GenerationConfig {
                temperature: SAMPLING_TEMPERATURE,
            },
        }
    }

    async fn send_request(&self, body: &GenerateContentRequest) -> Result<String> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| FolioError::config("GEMINI_API_KEY is not set"))?;

        let url = format!(
            "{}/{model}:generateContent?key={api_key}",
            BASE_URL,
            model = self.model,
        );

        tracing::debug!(model = %self.model, "sending completion request");

        let response = self
            .client
            .post(url)
            .timeout(REQUEST_TIMEOUT)
            .json(body)
            .send()
            .await
            .map_err(|err| {
                FolioError::request(
                    format!("Gemini API request failed: {err}"),
                    err.is_connect() || err.is_timeout(),
                )
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| FolioError::parse(format!("Failed to parse Gemini response: {err}")))?;

        extract_text_response(parsed)
    }
}

#[async_trait]
impl CompletionBackend for GeminiClient {
    async fn execute(&self, utterance: &str) -> Result<String> {
        let request = self.build_request(utterance);
        self.send_request(&request).await
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f64,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

fn extract_text_response(response: GenerateContentResponse) -> Result<String> {
    response
        .candidates
        .and_then(|mut candidates| candidates.pop())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
        .ok_or_else(|| {
            FolioError::parse("Gemini API returned no text in the response candidates")
        })
}

fn map_http_error(status: StatusCode, body: String) -> FolioError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.clone());

    let is_retryable = matches!(
        status,
        StatusCode::TOO_MANY_REQUESTS
            | StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
    );

    FolioError::request_with_status(status.as_u16(), message, is_retryable)
}
