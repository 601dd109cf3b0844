use crate::model::{AddOutcome, CartItem, CartKey, QuantityOutcome};
use rust_decimal::Decimal;

/// Operations on the session cart.
#[derive(Debug, Clone)]
pub enum CartAction {
    Add { item: CartItem, quantity: u32 },
    Increment(CartKey),
    Decrement(CartKey),
    /// `None` stands for missing or non-numeric input.
    SetQuantity { key: CartKey, value: Option<i64> },
    Remove(CartKey),
    Clear,
    /// Takes submitted quantities off their lines once an order is placed.
    Settle(Vec<(CartKey, u32)>),
    Total,
}

/// Results from CartActions - variants match 1:1 with CartAction
#[derive(Debug, Clone)]
pub enum CartActionResult {
    Add(AddOutcome),
    Increment(QuantityOutcome),
    Decrement(QuantityOutcome),
    SetQuantity(QuantityOutcome),
    Remove(bool),
    Clear(usize),
    Settle(usize),
    Total(Decimal),
}
