//! Response generation orchestrating transcript persistence and inference.
//!
//! `ResponseGenerator` owns the in-memory transcript and coordinates one
//! request at a time: append the user turn, persist, ask the inference
//! endpoint, append the assistant turn, persist. Inference failures are
//! mapped to fixed user-visible strings instead of propagating; the user
//! turn is never rolled back.

use tokio::sync::Mutex;
use tracing::warn;

use parley_types::error::InferenceError;
use parley_types::transcript::{Transcript, Turn};

use crate::history::HistoryStore;
use crate::inference::InferenceClient;

/// Reply sent when the inference endpoint cannot be reached.
pub const REPLY_UNREACHABLE: &str = "Error: Unable to fetch response from the API.";

/// Reply sent when the inference endpoint's response cannot be decoded.
pub const REPLY_INVALID: &str = "Error: Invalid API response.";

/// Assistant content substituted when a valid response carries no content
/// field.
pub const MISSING_CONTENT_PLACEHOLDER: &str = "No content in response.";

/// Turns a user prompt into the next assistant turn, persisting both.
///
/// Generic over `HistoryStore` and `InferenceClient` so the core never
/// depends on the infrastructure layer. The transcript lives behind a
/// mutex and the lock is held for the whole request, which serializes
/// overlapping calls -- concurrent requests against the same transcript
/// are not supported.
pub struct ResponseGenerator<S: HistoryStore, C: InferenceClient> {
    store: S,
    client: C,
    model: String,
    transcript: Mutex<Transcript>,
}

impl<S: HistoryStore, C: InferenceClient> ResponseGenerator<S, C> {
    /// Create a generator around a transcript loaded at startup.
    pub fn new(store: S, client: C, model: impl Into<String>, transcript: Transcript) -> Self {
        Self {
            store,
            client,
            model: model.into(),
            transcript: Mutex::new(transcript),
        }
    }

    /// Process one prompt and return the reply text to send back.
    ///
    /// The user turn is appended and persisted before the inference call,
    /// so a failed request still leaves the prompt in the transcript. A
    /// persistence failure is logged but does not abort the request.
    pub async fn reply(&self, prompt: &str) -> String {
        let mut transcript = self.transcript.lock().await;

        transcript.push(Turn::user(prompt));
        self.persist(&transcript).await;

        match self.client.generate(&self.model, &transcript).await {
            Ok(content) => {
                let text =
                    content.unwrap_or_else(|| MISSING_CONTENT_PLACEHOLDER.to_string());
                transcript.push(Turn::assistant(text.clone()));
                self.persist(&transcript).await;
                text
            }
            Err(err @ InferenceError::Transport(_)) => {
                warn!(backend = self.client.name(), error = %err, "inference request failed");
                REPLY_UNREACHABLE.to_string()
            }
            Err(err @ InferenceError::MalformedResponse(_)) => {
                warn!(backend = self.client.name(), error = %err, "inference response rejected");
                REPLY_INVALID.to_string()
            }
        }
    }

    /// Snapshot of the current transcript.
    pub async fn transcript(&self) -> Transcript {
        self.transcript.lock().await.clone()
    }

    async fn persist(&self, transcript: &Transcript) {
        if let Err(err) = self.store.save(transcript).await {
            warn!(error = %err, "failed to persist transcript, continuing");
        }
    }
}
