//! Chat-platform event types for Parley.
//!
//! Inbound events arrive from a platform gateway and are dispatched one at
//! a time. Mention detection against the bot's own identity is performed by
//! the platform client and carried on the event.

use serde::{Deserialize, Serialize};

/// The author of an inbound message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Platform-scoped user identifier.
    pub id: String,
    /// Display name shown in the channel.
    pub display_name: String,
    /// Whether the platform marks this author as a bot account.
    pub is_bot: bool,
}

/// The bot's own identity on the platform, used to filter self-authored
/// events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotIdentity {
    pub user_id: String,
    pub name: String,
}

/// An inbound chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageEvent {
    pub author: Author,
    /// Channel the message arrived in; replies go back to the same channel.
    pub channel_id: String,
    pub content: String,
    /// True when the message mentions the bot's identity.
    pub mentions_bot: bool,
}

/// Emitted once when the gateway has connected and knows who the bot is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadyEvent {
    pub bot_name: String,
}

/// The dispatcher's input: every event kind a gateway can produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatEvent {
    Ready(ReadyEvent),
    Message(MessageEvent),
}
