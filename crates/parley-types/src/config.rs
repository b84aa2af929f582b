//! Configuration types for Parley.
//!
//! `AppConfig` represents the `config.toml` a deployment provides. The
//! storage path, inference endpoint, and message-length limit all have
//! defaults; the gateway credential is only needed by platform bindings
//! that authenticate.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration, loaded from a TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub inference: InferenceConfig,

    #[serde(default)]
    pub gateway: GatewayConfig,

    #[serde(default)]
    pub history: HistoryConfig,
}

/// Where the inference endpoint lives and which model to ask for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Full URI of the chat completion endpoint.
    #[serde(default = "default_inference_uri")]
    pub uri: String,

    /// Model identifier passed on every request.
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_inference_uri() -> String {
    "http://localhost:11434/api/chat".to_string()
}

fn default_model() -> String {
    "llama3.1".to_string()
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            uri: default_inference_uri(),
            model: default_model(),
        }
    }
}

/// Chat-platform connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Credential for the platform connection. Bindings that authenticate
    /// fail at startup when this is absent; the console binding ignores it.
    #[serde(default)]
    pub token: Option<String>,

    /// Maximum length of a single outbound message, in characters.
    #[serde(default = "default_max_message_len")]
    pub max_message_len: usize,
}

fn default_max_message_len() -> usize {
    2000
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            token: None,
            max_message_len: default_max_message_len(),
        }
    }
}

/// Where the conversation transcript is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Path of the transcript file.
    #[serde(default = "default_history_path")]
    pub path: PathBuf,
}

fn default_history_path() -> PathBuf {
    PathBuf::from("history.json")
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: default_history_path(),
        }
    }
}
