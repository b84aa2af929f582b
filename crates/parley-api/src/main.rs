//! Parley entry point.
//!
//! Parses CLI arguments, loads configuration, wires the history store,
//! inference client, responder and gateway together, then runs the event
//! dispatcher until the gateway closes or a shutdown signal arrives.

mod cli;

use std::sync::Arc;

use clap::Parser;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use parley_core::adapter::ChatAdapter;
use parley_core::dispatch::Dispatcher;
use parley_core::gateway::ChatGateway;
use parley_core::history::HistoryStore;
use parley_core::responder::ResponseGenerator;
use parley_infra::config::load_config;
use parley_infra::gateway::ConsoleGateway;
use parley_infra::history::JsonFileHistoryStore;
use parley_infra::llm::OllamaClient;
use parley_types::chat::BotIdentity;

use cli::Cli;

const BOT_NAME: &str = "parley";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,parley=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let config = load_config(&cli.config).await?;

    let store = JsonFileHistoryStore::new(config.history.path.clone());
    let transcript = store.load().await;
    if !transcript.is_empty() {
        tracing::info!(turns = transcript.len(), "restored conversation history");
    }

    let client = OllamaClient::new(config.inference.uri.clone());
    let responder =
        ResponseGenerator::new(store, client, config.inference.model.clone(), transcript);

    let gateway = Arc::new(ConsoleGateway::new(BOT_NAME));
    let identity = BotIdentity {
        user_id: BOT_NAME.to_string(),
        name: BOT_NAME.to_string(),
    };
    let adapter = ChatAdapter::new(
        responder,
        Arc::clone(&gateway),
        identity,
        config.gateway.max_message_len,
    );

    let (events_tx, events_rx) = mpsc::channel(64);
    let dispatcher = Dispatcher::new(adapter, events_rx);

    println!(
        "  {} Parley relaying {} via the {} gateway",
        console::style("⚡").bold(),
        console::style(&config.inference.model).cyan(),
        console::style(gateway.name()).cyan()
    );
    println!("  {}", console::style("Press Ctrl+C to stop").dim());

    let listener = {
        let gateway = Arc::clone(&gateway);
        tokio::spawn(async move {
            if let Err(err) = gateway.listen(events_tx).await {
                tracing::error!(error = %err, "gateway connection lost");
            }
        })
    };

    // The dispatcher ends on its own once the gateway closes its channel.
    tokio::select! {
        _ = dispatcher.run() => {}
        _ = shutdown_signal() => {}
    }
    listener.abort();

    println!("\n  Stopped.");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
