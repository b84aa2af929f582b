//! Chat adapter: the event handler that relays messages to the responder.
//!
//! Filters out self-authored and bot-authored messages, requires a mention
//! of the bot, shows a working indicator while the reply is generated, and
//! sends the reply back as an ordered sequence of platform-sized chunks.

use std::sync::Arc;

use tracing::{info, warn};

use parley_types::chat::{BotIdentity, MessageEvent, ReadyEvent};
use parley_types::error::GatewayError;

use crate::chunk::split_message;
use crate::dispatch::EventHandler;
use crate::gateway::ChatGateway;
use crate::history::HistoryStore;
use crate::inference::InferenceClient;
use crate::responder::ResponseGenerator;

/// Relays mentioned messages through the responder and back out through
/// the gateway.
pub struct ChatAdapter<S: HistoryStore, C: InferenceClient, G: ChatGateway> {
    responder: ResponseGenerator<S, C>,
    gateway: Arc<G>,
    identity: BotIdentity,
    max_message_len: usize,
}

impl<S: HistoryStore, C: InferenceClient, G: ChatGateway> ChatAdapter<S, C, G> {
    pub fn new(
        responder: ResponseGenerator<S, C>,
        gateway: Arc<G>,
        identity: BotIdentity,
        max_message_len: usize,
    ) -> Self {
        Self {
            responder,
            gateway,
            identity,
            max_message_len,
        }
    }

    /// Send the reply to the originating channel, one chunk at a time.
    ///
    /// A permission rejection drops the rest of the message; any other
    /// send failure is logged per chunk and the remaining chunks are still
    /// attempted. Conversation state is unaffected either way.
    async fn deliver(&self, channel_id: &str, reply: &str) {
        for chunk in split_message(reply, self.max_message_len) {
            match self.gateway.send(channel_id, &chunk).await {
                Ok(()) => {}
                Err(GatewayError::PermissionDenied(detail)) => {
                    warn!(channel = channel_id, %detail, "no permission to send, dropping reply");
                    return;
                }
                Err(err) => {
                    warn!(channel = channel_id, error = %err, "failed to send chunk");
                }
            }
        }
    }
}

impl<S: HistoryStore, C: InferenceClient, G: ChatGateway> EventHandler for ChatAdapter<S, C, G> {
    async fn on_ready(&self, event: &ReadyEvent) {
        info!(bot = %event.bot_name, gateway = self.gateway.name(), "logged in");
    }

    async fn on_message(&self, event: &MessageEvent) {
        if event.author.id == self.identity.user_id || event.author.is_bot {
            return;
        }
        if !event.mentions_bot {
            return;
        }

        let prompt = format!("{} says: {}", event.author.display_name, event.content);

        self.gateway.typing(&event.channel_id).await;
        let reply = self.responder.reply(&prompt).await;
        self.deliver(&event.channel_id, &reply).await;
    }
}
