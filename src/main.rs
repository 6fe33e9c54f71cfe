mod app;
mod card_game;
mod domain;
mod game;
mod models;
mod shared;

use std::net::{IpAddr, SocketAddr};

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::domain::DeckStore;
use crate::game::DeckManager;
use crate::shared::{SERVER_ADDRESS, SERVER_PORT};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let ip: IpAddr = SERVER_ADDRESS
        .parse()
        .with_context(|| format!("invalid listen address {SERVER_ADDRESS}"))?;
    let addr = SocketAddr::new(ip, SERVER_PORT);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "deck service listening");

    let router = app::create_routes(DeckManager::new(DeckStore::new()).start());
    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("ctrl-c received, draining connections");
            }
        })
        .await
        .context("server error")?;

    tracing::info!("deck service stopped");
    Ok(())
}
