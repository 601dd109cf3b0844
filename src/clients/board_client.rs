//! # Board Client
//!
//! Refreshes fetch from the backend here and hand the result to the actor; reads take
//! a snapshot of the board and compute the view locally.
use crate::api::OrderApi;
use crate::board_actor::{BoardAction, BoardActionResult, BoardError, RefreshReport};
use crate::model::{CustomerOrders, OrderBoard, OrderId, OrderScope, OrderSummary};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use jiff::Timestamp;
use std::sync::Arc;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct BoardClient {
    inner: ResourceClient<OrderBoard>,
    api: Arc<dyn OrderApi>,
}

impl BoardClient {
    pub fn new(inner: ResourceClient<OrderBoard>, api: Arc<dyn OrderApi>) -> Self {
        Self { inner, api }
    }
}

#[async_trait]
impl ActorClient<OrderBoard> for BoardClient {
    type Error = BoardError;

    fn inner(&self) -> &ResourceClient<OrderBoard> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast_entity::<BoardError>()
            .unwrap_or_else(|e| BoardError::ActorCommunicationError(e.to_string()))
    }
}

impl BoardClient {
    /// Fetches `scope` and replaces its snapshot. On failure the previous snapshot
    /// stays in place.
    #[instrument(skip(self), fields(scope = %scope))]
    pub async fn refresh(&self, scope: OrderScope) -> Result<RefreshReport, BoardError> {
        let fetched_at = Timestamp::now();
        let orders = self
            .api
            .list_orders(scope)
            .await
            .map_err(|source| BoardError::RefreshFailed { scope, source })?;
        debug!(count = orders.len(), "Fetched orders");

        let action = BoardAction::Apply {
            scope,
            orders,
            fetched_at,
        };
        match self.perform(action).await? {
            BoardActionResult::Apply(report) => Ok(report),
            _ => unreachable!("Apply action must return Apply result"),
        }
    }

    /// Forget all snapshots, e.g. after logout.
    pub async fn reset(&self) -> Result<(), BoardError> {
        match self.perform(BoardAction::Reset).await? {
            BoardActionResult::Reset(()) => Ok(()),
            _ => unreachable!("Reset action must return Reset result"),
        }
    }

    pub async fn orders(&self, scope: OrderScope) -> Result<Vec<OrderSummary>, BoardError> {
        Ok(self.snapshot().await?.orders(scope).to_vec())
    }

    pub async fn customer_view(&self) -> Result<CustomerOrders, BoardError> {
        Ok(self.snapshot().await?.customer_view())
    }

    pub async fn kitchen_queue(&self, scope: OrderScope) -> Result<Vec<OrderSummary>, BoardError> {
        Ok(self.snapshot().await?.kitchen_queue(scope))
    }

    pub async fn filtered(
        &self,
        scope: OrderScope,
        status: Option<&str>,
    ) -> Result<Vec<OrderSummary>, BoardError> {
        Ok(self.snapshot().await?.filtered(scope, status))
    }

    pub async fn find(&self, id: OrderId) -> Result<Option<OrderSummary>, BoardError> {
        Ok(self.snapshot().await?.find(id).cloned())
    }
}
