//! Chat-platform gateway bindings.

pub mod console;

pub use console::ConsoleGateway;
