//! Shared domain types for Parley.
//!
//! This crate holds the data shapes used across the workspace: the
//! conversation transcript, chat-platform events, configuration, and the
//! error taxonomy. It has no IO of its own.

pub mod chat;
pub mod config;
pub mod error;
pub mod transcript;
