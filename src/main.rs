//! # krazz
//!
//! Headless client: connects a session for the configured role and logs the order
//! board as it changes until Ctrl-C.

use krazz_client::api::SessionEvent;
use krazz_client::config::ClientConfig;
use krazz_client::lifecycle::{setup_tracing, BoardEvent, Session};
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();
    let config = ClientConfig::load();

    info!(role = %config.role, api = %config.api_url, "Starting krazz client");
    let session = Session::connect(&config).map_err(|e| e.to_string())?;
    let mut session_events = session.subscribe();
    let (poller, mut events) = session.watch_orders(config.poll_interval());

    let span = tracing::info_span!("watch", role = %session.role());
    async {
        loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Interrupted");
                    break;
                }
                Ok(SessionEvent::Terminated(reason)) = session_events.recv() => {
                    warn!(?reason, "Session ended, log in again");
                    break;
                }
                event = events.recv() => match event {
                    Some(BoardEvent::Refreshed { scope, orders }) => {
                        info!(%scope, count = orders.len(), "Orders refreshed");
                    }
                    Some(BoardEvent::OrderReady(notice)) => info!("{notice}"),
                    Some(BoardEvent::RefreshFailed { scope, error }) if error.is_transient() => {
                        warn!(%scope, %error, "Backend unreachable, showing last known orders");
                    }
                    Some(BoardEvent::RefreshFailed { scope, error }) => {
                        error!(%scope, %error, "Order list unavailable");
                    }
                    None => break,
                },
            }
        }
    }
    .instrument(span)
    .await;

    poller.stop().await?;
    session.shutdown().await
}
