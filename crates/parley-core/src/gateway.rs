//! ChatGateway trait definition.
//!
//! The actual chat-platform client (authentication, event subscription,
//! wire protocol) is an external collaborator behind this seam. A gateway
//! produces inbound [`ChatEvent`]s over a channel and carries outbound
//! sends back to the platform.

use tokio::sync::mpsc;

use parley_types::chat::ChatEvent;
use parley_types::error::GatewayError;

/// Binding to a chat platform.
///
/// Uses native async fn in traits (RPITIT). Implementations live in
/// `parley-infra` (e.g. the console binding).
pub trait ChatGateway: Send + Sync {
    /// Human-readable binding name, used in diagnostics.
    fn name(&self) -> &str;

    /// Produce inbound events into `events` until the stream ends.
    ///
    /// Returns when the platform connection closes; an error means the
    /// connection failed rather than ended.
    fn listen(
        &self,
        events: mpsc::Sender<ChatEvent>,
    ) -> impl std::future::Future<Output = Result<(), GatewayError>> + Send;

    /// Send one message to a channel. The text must already respect the
    /// platform's per-message length limit.
    fn send(
        &self,
        channel_id: &str,
        text: &str,
    ) -> impl std::future::Future<Output = Result<(), GatewayError>> + Send;

    /// Best-effort "working" indicator shown to the channel while a reply
    /// is being generated. Failures are swallowed by implementations.
    fn typing(&self, channel_id: &str) -> impl std::future::Future<Output = ()> + Send;
}
