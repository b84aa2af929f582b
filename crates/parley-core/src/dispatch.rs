//! Event dispatch: explicit handler registration instead of client
//! subclassing.
//!
//! A [`Dispatcher`] pulls events from a gateway's channel and invokes one
//! [`EventHandler`] callback per event kind, strictly one event at a time
//! in arrival order. Handlers are infallible at this boundary: they log
//! and absorb their own failures, so no single event can stop the loop.

use tokio::sync::mpsc;
use tracing::debug;

use parley_types::chat::{ChatEvent, MessageEvent, ReadyEvent};

/// Callbacks invoked by the dispatcher, one per event kind.
///
/// Uses native async fn in traits (RPITIT).
pub trait EventHandler: Send + Sync {
    /// The gateway connected and knows the bot's identity.
    fn on_ready(&self, event: &ReadyEvent) -> impl std::future::Future<Output = ()> + Send;

    /// An inbound message arrived.
    fn on_message(&self, event: &MessageEvent) -> impl std::future::Future<Output = ()> + Send;
}

/// Serial event loop over a gateway's inbound channel.
///
/// Processing is single-consumer and in arrival order, so the shared
/// transcript sees a single writer without further coordination.
pub struct Dispatcher<H: EventHandler> {
    handler: H,
    events: mpsc::Receiver<ChatEvent>,
}

impl<H: EventHandler> Dispatcher<H> {
    pub fn new(handler: H, events: mpsc::Receiver<ChatEvent>) -> Self {
        Self { handler, events }
    }

    /// Run until the event channel closes (every sender dropped).
    pub async fn run(mut self) {
        while let Some(event) = self.events.recv().await {
            match event {
                ChatEvent::Ready(ready) => self.handler.on_ready(&ready).await,
                ChatEvent::Message(message) => self.handler.on_message(&message).await,
            }
        }
        debug!("event channel closed, dispatcher stopping");
    }
}
