//! Business logic and port trait definitions for Parley.
//!
//! This crate defines the "ports" (store, inference, gateway traits) that
//! the infrastructure layer implements, plus the pure chunking algorithm
//! and the orchestration that turns an inbound message into an outbound
//! reply. It depends only on `parley-types` -- never on `parley-infra` or
//! any IO crate.

pub mod adapter;
pub mod chunk;
pub mod dispatch;
pub mod gateway;
pub mod history;
pub mod inference;
pub mod responder;
