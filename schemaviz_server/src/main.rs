
mod config;
mod error;
mod model;
mod web;

#[cfg(test)]
pub mod _dev_utils;

pub use self::error::{Error, Result};
pub use config::config;

use crate::model::ModelManager;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mm = ModelManager::new();
    let routes_all = web::app(mm.clone());

    let addr = config().LISTEN_ADDR;
    let listener = TcpListener::bind(addr).await?;
    info!("{:<12} - {addr}\n", "LISTENING");

    axum::serve(listener, routes_all)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    mm.close().await;
    info!("{:<12} - bye", "SHUTDOWN");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(ex) = tokio::signal::ctrl_c().await {
        warn!("{:<12} - ctrl-c handler failed: {ex}", "SHUTDOWN");
    }
}
