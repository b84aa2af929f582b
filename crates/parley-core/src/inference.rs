//! InferenceClient trait definition.
//!
//! The inference endpoint is an opaque request/response collaborator: it
//! receives the full transcript and produces the next assistant turn in a
//! single complete payload. Implementations live in `parley-infra`.

use parley_types::error::InferenceError;
use parley_types::transcript::Transcript;

/// Client for a chat-completion inference endpoint.
///
/// Uses native async fn in traits (RPITIT).
pub trait InferenceClient: Send + Sync {
    /// Human-readable backend name (e.g. "ollama"), used in diagnostics.
    fn name(&self) -> &str;

    /// Issue one non-streaming completion request for the transcript.
    ///
    /// Returns `Ok(None)` when the endpoint answered with a structurally
    /// valid payload whose content field is absent; the caller decides how
    /// to degrade. One attempt only -- no retries, and no timeout beyond
    /// the transport's own defaults.
    fn generate(
        &self,
        model: &str,
        transcript: &Transcript,
    ) -> impl std::future::Future<Output = Result<Option<String>, InferenceError>> + Send;
}
