//! Infrastructure implementations for Parley.
//!
//! Concrete bindings for the ports defined in `parley-core`: the JSON-file
//! history store, the Ollama inference client, the configuration loader,
//! and the console gateway.

pub mod config;
pub mod gateway;
pub mod history;
pub mod llm;
