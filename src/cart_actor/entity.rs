use super::actions::{CartAction, CartActionResult};
use super::error::CartError;
use crate::model::Cart;
use actor_framework::ActorEntity;
use async_trait::async_trait;
use tracing::info;

#[async_trait]
impl ActorEntity for Cart {
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Context = ();
    type Error = CartError;

    async fn handle_action(
        &mut self,
        action: CartAction,
        _ctx: &Self::Context,
    ) -> Result<CartActionResult, CartError> {
        match action {
            CartAction::Add { item, quantity } => {
                let outcome = self.add(item, quantity);
                if let Some(shortfall) = &outcome.shortfall {
                    info!(
                        key = %outcome.key,
                        requested = shortfall.requested,
                        available = shortfall.available,
                        "Insufficient stock"
                    );
                }
                Ok(CartActionResult::Add(outcome))
            }
            CartAction::Increment(key) => self.increment(&key).map(CartActionResult::Increment),
            CartAction::Decrement(key) => self.decrement(&key).map(CartActionResult::Decrement),
            CartAction::SetQuantity { key, value } => self
                .set_quantity(&key, value)
                .map(CartActionResult::SetQuantity),
            CartAction::Remove(key) => Ok(CartActionResult::Remove(self.remove(&key))),
            CartAction::Clear => {
                let removed = self.clear();
                info!(removed, "Cart cleared");
                Ok(CartActionResult::Clear(removed))
            }
            CartAction::Settle(submitted) => {
                let removed = self.settle(&submitted);
                info!(removed, remaining = self.len(), "Cart settled");
                Ok(CartActionResult::Settle(removed))
            }
            CartAction::Total => Ok(CartActionResult::Total(self.total())),
        }
    }
}
