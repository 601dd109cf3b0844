//! # Cart Client
//!
//! High-level API over the session's Cart actor. Every view that touches the cart
//! holds a clone of this client.
use crate::cart_actor::{CartAction, CartActionResult, CartError};
use crate::model::{parse_quantity, AddOutcome, Cart, CartItem, CartKey, QuantityOutcome};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Client for interacting with the Cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
}

impl CartClient {
    pub fn new(inner: ResourceClient<Cart>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<Cart> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast_entity::<CartError>()
            .unwrap_or_else(|e| CartError::ActorCommunicationError(e.to_string()))
    }
}

impl CartClient {
    /// Add `quantity` units of a variant.
    ///
    /// Check [`AddOutcome::shortfall`]: when stock did not cover the request, only part
    /// of it was applied and the user should be told how many units remain.
    #[instrument(skip(self, item), fields(key = %item.key()))]
    pub async fn add(&self, item: CartItem, quantity: u32) -> Result<AddOutcome, CartError> {
        debug!("Adding {} units", quantity);
        match self.perform(CartAction::Add { item, quantity }).await? {
            CartActionResult::Add(outcome) => Ok(outcome),
            _ => unreachable!("Add action must return Add result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn increment(&self, key: CartKey) -> Result<QuantityOutcome, CartError> {
        match self.perform(CartAction::Increment(key)).await? {
            CartActionResult::Increment(outcome) => Ok(outcome),
            _ => unreachable!("Increment action must return Increment result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn decrement(&self, key: CartKey) -> Result<QuantityOutcome, CartError> {
        match self.perform(CartAction::Decrement(key)).await? {
            CartActionResult::Decrement(outcome) => Ok(outcome),
            _ => unreachable!("Decrement action must return Decrement result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn set_quantity(
        &self,
        key: CartKey,
        value: Option<i64>,
    ) -> Result<QuantityOutcome, CartError> {
        match self.perform(CartAction::SetQuantity { key, value }).await? {
            CartActionResult::SetQuantity(outcome) => Ok(outcome),
            _ => unreachable!("SetQuantity action must return SetQuantity result"),
        }
    }

    /// Set the quantity straight from a form field's text.
    pub async fn set_quantity_input(
        &self,
        key: CartKey,
        raw: &str,
    ) -> Result<QuantityOutcome, CartError> {
        self.set_quantity(key, parse_quantity(raw)).await
    }

    /// Returns whether the line existed.
    #[instrument(skip(self))]
    pub async fn remove(&self, key: CartKey) -> Result<bool, CartError> {
        match self.perform(CartAction::Remove(key)).await? {
            CartActionResult::Remove(removed) => Ok(removed),
            _ => unreachable!("Remove action must return Remove result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<usize, CartError> {
        match self.perform(CartAction::Clear).await? {
            CartActionResult::Clear(removed) => Ok(removed),
            _ => unreachable!("Clear action must return Clear result"),
        }
    }

    /// Removes what an order took from the cart. See [`Cart::settle`].
    #[instrument(skip(self, submitted))]
    pub async fn settle(&self, submitted: Vec<(CartKey, u32)>) -> Result<usize, CartError> {
        match self.perform(CartAction::Settle(submitted)).await? {
            CartActionResult::Settle(removed) => Ok(removed),
            _ => unreachable!("Settle action must return Settle result"),
        }
    }

    pub async fn total(&self) -> Result<Decimal, CartError> {
        match self.perform(CartAction::Total).await? {
            CartActionResult::Total(total) => Ok(total),
            _ => unreachable!("Total action must return Total result"),
        }
    }
}
