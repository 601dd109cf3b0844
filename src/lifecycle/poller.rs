//! # Order Lifecycle Poller
//!
//! Keeps a role's order view fresh by refreshing its scopes on a fixed interval and
//! turns "became ready" transitions into [`BoardEvent::OrderReady`].
//!
//! Ticks never overlap: a tick waits for its refreshes to finish, and ticks missed
//! meanwhile are delayed rather than burst. Stopping waits for an in-flight refresh to
//! complete, so once [`PollHandle::stop`] returns no further request is issued.

use crate::board_actor::BoardError;
use crate::clients::BoardClient;
use crate::model::{OrderScope, OrderSummary, ReadyNotice};
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info, instrument, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum BoardEvent {
    Refreshed {
        scope: OrderScope,
        orders: Vec<OrderSummary>,
    },
    OrderReady(ReadyNotice),
    /// The previous snapshot is still shown; the next tick retries.
    RefreshFailed { scope: OrderScope, error: BoardError },
}

pub struct OrderPoller;

impl OrderPoller {
    /// Starts polling `scopes` every `interval`, beginning immediately.
    ///
    /// `announce_ready` is off for views that have no use for the notification (the
    /// kitchen marks orders ready itself).
    pub fn start(
        board: BoardClient,
        scopes: Vec<OrderScope>,
        interval: Duration,
        announce_ready: bool,
    ) -> (PollHandle, mpsc::Receiver<BoardEvent>) {
        let (events_tx, events_rx) = mpsc::channel(64);
        let (stop_tx, stop_rx) = oneshot::channel();
        let task = tokio::spawn(poll_loop(
            board,
            scopes,
            interval,
            announce_ready,
            events_tx,
            stop_rx,
        ));
        (
            PollHandle {
                stop: Some(stop_tx),
                task,
            },
            events_rx,
        )
    }
}

#[instrument(name = "poller", skip_all, fields(interval = ?interval))]
async fn poll_loop(
    board: BoardClient,
    scopes: Vec<OrderScope>,
    interval: Duration,
    announce_ready: bool,
    events: mpsc::Sender<BoardEvent>,
    mut stop: oneshot::Receiver<()>,
) {
    info!(scopes = scopes.len(), "Poller started");
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut ticks: u64 = 0;

    'poll: loop {
        tokio::select! {
            biased;
            _ = &mut stop => break 'poll,
            _ = ticker.tick() => {
                ticks += 1;
                debug!(tick = ticks, "Polling");
                for &scope in &scopes {
                    for event in refresh_scope(&board, scope, announce_ready).await {
                        // a slow consumer must not keep the poller from stopping
                        tokio::select! {
                            biased;
                            _ = &mut stop => break 'poll,
                            // a dropped receiver only means nobody is watching
                            _ = events.send(event) => {}
                        }
                    }
                }
            }
        }
    }
    info!(ticks, "Poller stopped");
}

async fn refresh_scope(board: &BoardClient, scope: OrderScope, announce_ready: bool) -> Vec<BoardEvent> {
    match board.refresh(scope).await {
        Ok(report) => {
            let mut events = vec![BoardEvent::Refreshed {
                scope,
                orders: report.orders,
            }];
            if announce_ready {
                events.extend(report.newly_ready.into_iter().map(BoardEvent::OrderReady));
            }
            events
        }
        Err(error) if error.is_transient() => {
            warn!(%scope, %error, "Refresh failed, retrying next tick");
            vec![BoardEvent::RefreshFailed { scope, error }]
        }
        Err(error) => {
            error!(%scope, %error, "Refresh failed");
            vec![BoardEvent::RefreshFailed { scope, error }]
        }
    }
}

/// Owner of a running poller. Dropping it without [`stop`](Self::stop) also ends the
/// poller, but without waiting.
pub struct PollHandle {
    stop: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl PollHandle {
    /// Stops the poller and waits for it to exit.
    pub async fn stop(mut self) -> Result<(), String> {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        (&mut self.task)
            .await
            .map_err(|e| format!("Poller task failed: {e:?}"))
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
    }
}
