//! Console gateway: a local stdin/stdout binding.
//!
//! Useful for exercising the full relay pipeline without a chat-platform
//! account. Every typed line is delivered as a mentioned message from a
//! single console author; replies are printed to stdout. Real platform
//! bindings implement the same [`ChatGateway`] trait against their wire
//! protocols.

use std::io::Write;

use tokio::io::AsyncBufReadExt;
use tokio::sync::mpsc;

use parley_core::gateway::ChatGateway;
use parley_types::chat::{Author, ChatEvent, MessageEvent, ReadyEvent};
use parley_types::error::GatewayError;

/// Channel id used for all console traffic.
pub const CONSOLE_CHANNEL: &str = "console";

/// Stdin/stdout [`ChatGateway`].
#[derive(Debug, Clone)]
pub struct ConsoleGateway {
    bot_name: String,
}

impl ConsoleGateway {
    pub fn new(bot_name: impl Into<String>) -> Self {
        Self {
            bot_name: bot_name.into(),
        }
    }

    fn console_author() -> Author {
        Author {
            id: "console-user".to_string(),
            display_name: "user".to_string(),
            is_bot: false,
        }
    }
}

impl ChatGateway for ConsoleGateway {
    fn name(&self) -> &str {
        "console"
    }

    async fn listen(&self, events: mpsc::Sender<ChatEvent>) -> Result<(), GatewayError> {
        let ready = ChatEvent::Ready(ReadyEvent {
            bot_name: self.bot_name.clone(),
        });
        if events.send(ready).await.is_err() {
            return Ok(());
        }

        let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    let content = line.trim();
                    if content.is_empty() {
                        continue;
                    }
                    let event = ChatEvent::Message(MessageEvent {
                        author: Self::console_author(),
                        channel_id: CONSOLE_CHANNEL.to_string(),
                        content: content.to_string(),
                        mentions_bot: true,
                    });
                    if events.send(event).await.is_err() {
                        // Receiver gone; the dispatcher has stopped.
                        return Ok(());
                    }
                }
                // EOF ends the conversation.
                Ok(None) => return Ok(()),
                Err(err) => return Err(GatewayError::Connection(err.to_string())),
            }
        }
    }

    async fn send(&self, _channel_id: &str, text: &str) -> Result<(), GatewayError> {
        let mut stdout = std::io::stdout();
        writeln!(stdout, "{text}").map_err(|err| GatewayError::Send(err.to_string()))
    }

    async fn typing(&self, _channel_id: &str) {
        // A terminal has no typing indicator.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn send_writes_without_error() {
        let gateway = ConsoleGateway::new("parley");
        gateway.send(CONSOLE_CHANNEL, "hello").await.unwrap();
    }

    #[tokio::test]
    async fn listen_emits_ready_first() {
        let gateway = ConsoleGateway::new("parley");
        let (tx, mut rx) = mpsc::channel(4);

        // Run listen concurrently; stdin stays open, so only consume the
        // first event and then drop the receiver to stop the loop.
        let handle = tokio::spawn(async move { gateway.listen(tx).await });

        let first = rx.recv().await.unwrap();
        assert!(matches!(first, ChatEvent::Ready(ref r) if r.bot_name == "parley"));

        drop(rx);
        handle.abort();
    }
}
