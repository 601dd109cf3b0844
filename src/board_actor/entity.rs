use super::actions::{BoardAction, BoardActionResult, RefreshReport};
use super::error::BoardError;
use crate::model::OrderBoard;
use actor_framework::ActorEntity;
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl ActorEntity for OrderBoard {
    type Action = BoardAction;
    type ActionResult = BoardActionResult;
    type Context = ();
    type Error = BoardError;

    async fn handle_action(
        &mut self,
        action: BoardAction,
        _ctx: &Self::Context,
    ) -> Result<BoardActionResult, BoardError> {
        match action {
            BoardAction::Apply {
                scope,
                orders,
                fetched_at,
            } => {
                debug!(%scope, count = orders.len(), "Applying snapshot");
                let newly_ready = self.apply(scope, orders, fetched_at);
                for notice in &newly_ready {
                    info!(order_id = %notice.order_id, %scope, "Order is ready");
                }
                Ok(BoardActionResult::Apply(RefreshReport {
                    scope,
                    orders: self.orders(scope).to_vec(),
                    newly_ready,
                }))
            }
            BoardAction::Reset => {
                *self = OrderBoard::new();
                Ok(BoardActionResult::Reset(()))
            }
        }
    }
}
