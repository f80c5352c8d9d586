//! CryptoBuddy terminal chat
//!
//! Reads questions from stdin and answers on stdout. Logs go to stderr so
//! they never interleave with the conversation.

mod chat;

use std::io;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crypto_buddy::Responder;

use crate::chat::{ChatLoop, WRAP_WIDTH};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let responder = Responder::with_defaults();
    tracing::info!("Starting chat");

    let mut chat = ChatLoop::new(responder, WRAP_WIDTH);
    let exchanges = chat.run(io::stdin().lock(), io::stdout().lock())?;

    tracing::info!(exchanges, "Chat finished");
    Ok(())
}
