//! Ollama chat API client.
//!
//! Speaks the native Ollama `/api/chat` protocol: one POST with the model
//! name and the full message list, streaming disabled, one complete JSON
//! payload back. Hand-rolled wire types over `reqwest` -- the surface used
//! here is two structs deep.

use serde::{Deserialize, Serialize};

use parley_core::inference::InferenceClient;
use parley_types::error::InferenceError;
use parley_types::transcript::{Transcript, Turn};

/// HTTP client for an Ollama-compatible chat endpoint.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: reqwest::Client,
    uri: String,
}

impl OllamaClient {
    /// Create a client for the given chat endpoint URI.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            uri: uri.into(),
        }
    }
}

/// Request body for `/api/chat`.
///
/// `Turn` already serializes as `{role, content}`, which is exactly the
/// message shape the endpoint expects.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Turn],
    /// Always false: the response is delivered as one complete payload.
    stream: bool,
}

/// Response body for a non-streaming `/api/chat` call.
///
/// Only the assistant message is of interest; everything else in the
/// payload (timings, token counts) is ignored.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl InferenceClient for OllamaClient {
    fn name(&self) -> &str {
        "ollama"
    }

    async fn generate(
        &self,
        model: &str,
        transcript: &Transcript,
    ) -> Result<Option<String>, InferenceError> {
        let request = ChatRequest {
            model,
            messages: transcript.turns(),
            stream: false,
        };

        let response = self
            .client
            .post(&self.uri)
            .json(&request)
            .send()
            .await
            .map_err(|err| InferenceError::Transport(err.to_string()))?
            .error_for_status()
            .map_err(|err| InferenceError::Transport(err.to_string()))?;

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|err| InferenceError::MalformedResponse(err.to_string()))?;

        Ok(body.message.and_then(|message| message.content))
    }
}
