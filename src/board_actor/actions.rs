use crate::model::{OrderScope, OrderSummary, ReadyNotice};
use jiff::Timestamp;

#[derive(Debug, Clone)]
pub enum BoardAction {
    /// Replace the snapshot of `scope` with orders fetched at `fetched_at`.
    Apply {
        scope: OrderScope,
        orders: Vec<OrderSummary>,
        fetched_at: Timestamp,
    },
    /// Drop every snapshot and the announced set.
    Reset,
}

/// What a successful refresh produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshReport {
    pub scope: OrderScope,
    /// The scope's snapshot after the refresh.
    pub orders: Vec<OrderSummary>,
    pub newly_ready: Vec<ReadyNotice>,
}

/// Results from BoardActions - variants match 1:1 with BoardAction
#[derive(Debug, Clone)]
pub enum BoardActionResult {
    Apply(RefreshReport),
    Reset(()),
}
