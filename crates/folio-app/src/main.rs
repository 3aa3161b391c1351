//! Folio application binary - composition root.
//!
//! Ties the workspace crates into a terminal chat session:
//! 1. Parse CLI arguments and load configuration from TOML
//! 2. Initialize tracing
//! 3. Probe the backend health endpoint (informational only)
//! 4. Run the assisted responder: remote-first, local rule engine on
//!    any failure

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};

use folio_chat::knowledge::KnowledgeBase;
use folio_chat::session::ChatSession;
use folio_client::assist::AssistedResponder;
use folio_client::backend::BackendClient;
use folio_core::config::FolioConfig;

mod cli;

use clap::Parser;
use cli::CliArgs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config.
    let config_file = args.resolve_config_path();
    let mut config = FolioConfig::load_or_default(&config_file);

    if let Some(ref url) = args.backend_url {
        config.backend.base_url = url.clone();
    }
    if args.local {
        config.backend.enabled = false;
    }

    // Tracing.
    let log_level = args.resolve_log_level(&config.general.log_level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    tracing::info!("Starting Folio v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(path = %config_file.display(), "Configuration resolved");

    let client = BackendClient::new(config.backend.clone());

    // Health probe. Purely informational: a dead backend just means every
    // reply comes from the local engine.
    if config.backend.enabled {
        match client.health().await {
            Ok(health) => tracing::info!(status = %health.status, "Backend reachable"),
            Err(e) => tracing::warn!(error = %e, "Backend unreachable, replies will be local"),
        }
    } else {
        tracing::info!("Backend disabled, running fully local");
    }

    let session = ChatSession::new(KnowledgeBase::builtin());
    tracing::debug!(session_id = %session.id, "Chat session opened");
    let mut assisted = AssistedResponder::new(client, session);

    // One-shot mode.
    if let Some(ref message) = args.message {
        let reply = assisted.send(message).await;
        println!("{}", reply);
        return Ok(());
    }

    // Interactive session.
    println!("Folio assistant ready. Ask about skills, experience, or projects.");
    println!("Type 'exit' to leave.\n");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt()?;

    while let Some(line) = lines.next_line().await? {
        let message = line.trim();
        if message.is_empty() {
            prompt()?;
            continue;
        }
        if message.eq_ignore_ascii_case("exit") || message.eq_ignore_ascii_case("quit") {
            break;
        }

        let reply = assisted.send(message).await;
        println!("\n{}\n", reply);
        prompt()?;
    }

    tracing::info!(
        turns = assisted.session().history().len(),
        "Session closed"
    );
    Ok(())
}

fn prompt() -> std::io::Result<()> {
    print!("> ");
    std::io::stdout().flush()
}
