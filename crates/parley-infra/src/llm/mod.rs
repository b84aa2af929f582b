//! Inference endpoint client implementations.

pub mod ollama;

pub use ollama::OllamaClient;
