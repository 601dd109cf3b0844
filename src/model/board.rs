//! Role-scoped order snapshots and the "order is ready" edge detection.

use super::order::{OrderId, OrderSummary};
use super::scope::OrderScope;
use super::status::StatusName;
use jiff::Timestamp;
use std::collections::{HashMap, HashSet};
use std::fmt::Display;

/// Orders of `current` that are ready now and were absent from, or not ready in,
/// `previous`.
pub fn notify_if_ready<'a>(
    previous: &[OrderSummary],
    current: &'a [OrderSummary],
) -> Vec<&'a OrderSummary> {
    let before: HashMap<OrderId, &StatusName> = previous
        .iter()
        .map(|order| (order.id, order.status_name()))
        .collect();

    current
        .iter()
        .filter(|order| order.status_name().is_ready())
        .filter(|order| !before.get(&order.id).is_some_and(|status| status.is_ready()))
        .collect()
}

/// One user-visible "your order is ready" notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadyNotice {
    pub order_id: OrderId,
    pub scope: OrderScope,
    pub table: Option<u32>,
    pub customer_name: Option<String>,
}

impl Display for ReadyNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order {} is ready", self.order_id)?;
        if let Some(table) = self.table {
            write!(f, " (table {table})")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub orders: Vec<OrderSummary>,
    pub fetched_at: Timestamp,
}

/// The customer's combined view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerOrders {
    pub today: Vec<OrderSummary>,
    /// Recent orders minus anything already listed under `today`.
    pub recent: Vec<OrderSummary>,
}

/// Latest snapshot per scope. Snapshots are replaced wholesale, never merged.
#[derive(Debug, Clone, Default)]
pub struct OrderBoard {
    snapshots: HashMap<OrderScope, Snapshot>,
    announced: HashSet<OrderId>,
}

impl OrderBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self, scope: OrderScope) -> Option<&Snapshot> {
        self.snapshots.get(&scope)
    }

    pub fn orders(&self, scope: OrderScope) -> &[OrderSummary] {
        self.snapshots
            .get(&scope)
            .map(|snapshot| snapshot.orders.as_slice())
            .unwrap_or(&[])
    }

    /// Replaces the snapshot of `scope` and returns the ready notices it produces.
    ///
    /// An order is announced at most once per board, even when it shows up in more
    /// than one scope, and only from scopes that [announce](OrderScope::announces_ready).
    /// A fetch that started before the current snapshot's is dropped.
    pub fn apply(
        &mut self,
        scope: OrderScope,
        orders: Vec<OrderSummary>,
        fetched_at: Timestamp,
    ) -> Vec<ReadyNotice> {
        let previous = match self.snapshots.get(&scope) {
            Some(snapshot) if snapshot.fetched_at > fetched_at => return Vec::new(),
            Some(snapshot) => snapshot.orders.as_slice(),
            None => &[],
        };

        let ready = if scope.announces_ready() {
            notify_if_ready(previous, &orders)
        } else {
            Vec::new()
        };
        let notices = ready
            .into_iter()
            .filter(|order| self.announced.insert(order.id))
            .map(|order| ReadyNotice {
                order_id: order.id,
                scope,
                table: order.table,
                customer_name: order.customer_name.clone(),
            })
            .collect();

        self.snapshots.insert(scope, Snapshot { orders, fetched_at });
        notices
    }

    pub fn customer_view(&self) -> CustomerOrders {
        let today = self.orders(OrderScope::Today).to_vec();
        let listed: HashSet<OrderId> = today.iter().map(|order| order.id).collect();
        let recent = self
            .orders(OrderScope::Recent)
            .iter()
            .filter(|order| !listed.contains(&order.id))
            .cloned()
            .collect();
        CustomerOrders { today, recent }
    }

    /// Orders the kitchen still has to work on, oldest first.
    pub fn kitchen_queue(&self, scope: OrderScope) -> Vec<OrderSummary> {
        let mut queue: Vec<_> = self
            .orders(scope)
            .iter()
            .filter(|order| {
                let status = order.status_name();
                status.is(StatusName::PENDING) || status.is(StatusName::IN_KITCHEN)
            })
            .cloned()
            .collect();
        queue.sort_by_key(|order| order.id);
        queue
    }

    /// Orders of `scope` in `status`, or all of them when no status is given.
    pub fn filtered(&self, scope: OrderScope, status: Option<&str>) -> Vec<OrderSummary> {
        self.orders(scope)
            .iter()
            .filter(|order| status.is_none_or(|name| order.status_name().is(name)))
            .cloned()
            .collect()
    }

    pub fn find(&self, id: OrderId) -> Option<&OrderSummary> {
        self.snapshots
            .values()
            .flat_map(|snapshot| snapshot.orders.iter())
            .find(|order| order.id == id)
    }
}
