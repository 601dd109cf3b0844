//! Cart lines and the pure quantity policy behind the session cart.
//!
//! Every mutation keeps `1 <= quantity <= stock_limit` for every line. Requests that
//! would break the bound are clamped and the clamp is reported back as a value, never
//! as an error.

use super::menu::{MenuVariant, VariantId};
use crate::cart_actor::CartError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identity of a cart line.
///
/// A variant id alone is not unique across every catalog view, so the key also carries
/// the variant name (or the SKU when the name is missing).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartKey(String);

impl CartKey {
    pub fn new(variant_id: VariantId, variant_name: Option<&str>, sku: Option<&str>) -> Self {
        let non_blank = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };
        match variant_name.and_then(non_blank).or_else(|| sku.and_then(non_blank)) {
            Some(qualifier) => Self(format!("{variant_id}-{qualifier}")),
            None => Self(variant_id.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CartKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a view hands to the cart when the user presses "add".
///
/// `stock_limit` is the last stock figure the server reported. It caps quantities
/// locally but says nothing about whether the order will be accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub variant_id: VariantId,
    pub sku: Option<String>,
    pub product_name: String,
    pub variant_name: String,
    pub unit_price: Decimal,
    pub barcode: Option<String>,
    pub image_url: Option<String>,
    pub stock_limit: u32,
}

impl CartItem {
    pub fn key(&self) -> CartKey {
        CartKey::new(self.variant_id, Some(&self.variant_name), self.sku.as_deref())
    }

    /// Snapshot of a catalog variant, with image paths resolved against `media_base`.
    pub fn from_variant(variant: &MenuVariant, media_base: &str) -> Self {
        Self {
            variant_id: variant.id,
            sku: variant.sku.clone(),
            product_name: variant.product_name.clone(),
            variant_name: variant.variant_name.clone(),
            unit_price: variant.price,
            barcode: variant.barcode.clone(),
            image_url: variant.image_url(media_base),
            stock_limit: variant.available_stock(),
        }
    }
}

/// One distinct variant in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub key: CartKey,
    pub item: CartItem,
    quantity: u32,
}

impl CartLine {
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn line_total(&self) -> Decimal {
        self.item.unit_price * Decimal::from(self.quantity)
    }
}

/// Reported when stock did not cover a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockShortfall {
    pub requested: u32,
    /// Units that could still be added before the request.
    pub available: u32,
    pub shortfall: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    pub key: CartKey,
    /// Quantity of the line after the call; 0 when nothing could be inserted.
    pub quantity: u32,
    pub added: u32,
    pub shortfall: Option<StockShortfall>,
}

impl AddOutcome {
    pub fn is_insufficient(&self) -> bool {
        self.shortfall.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clamp {
    AtStockLimit(u32),
    AtMinimum,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityOutcome {
    pub key: CartKey,
    pub quantity: u32,
    pub clamp: Option<Clamp>,
}

/// Parses raw quantity input from a form field. Anything non-numeric is `None`.
pub fn parse_quantity(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// The session's in-progress selection, in the order lines were first added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, key: &CartKey) -> Option<&CartLine> {
        self.lines.iter().find(|line| &line.key == key)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn total_units(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Adds `requested` units of `item`, merging into an existing line with the same key.
    ///
    /// Only as many units as stock allows are applied; the rest is reported as a
    /// shortfall. A request of 0 counts as 1. Cached attributes of an existing line are
    /// kept as they were on first add.
    pub fn add(&mut self, item: CartItem, requested: u32) -> AddOutcome {
        let requested = requested.max(1);
        let key = item.key();
        let position = self.position(&key);

        let (current, limit) = match position {
            Some(i) => (self.lines[i].quantity, self.lines[i].item.stock_limit),
            None => (0, item.stock_limit),
        };
        let available = limit.saturating_sub(current);
        let added = requested.min(available);
        let shortfall = (added < requested).then(|| StockShortfall {
            requested,
            available,
            shortfall: requested - added,
        });

        if added > 0 {
            match position {
                Some(i) => self.lines[i].quantity += added,
                None => self.lines.push(CartLine {
                    key: key.clone(),
                    item,
                    quantity: added,
                }),
            }
        }

        AddOutcome {
            key,
            quantity: current + added,
            added,
            shortfall,
        }
    }

    pub fn increment(&mut self, key: &CartKey) -> Result<QuantityOutcome, CartError> {
        let line = self.line_mut(key)?;
        let limit = line.item.stock_limit;
        let clamp = if line.quantity >= limit {
            Some(Clamp::AtStockLimit(limit))
        } else {
            line.quantity += 1;
            None
        };
        Ok(line.outcome(clamp))
    }

    /// Decrements by one. The line is never removed; quantity floors at 1.
    pub fn decrement(&mut self, key: &CartKey) -> Result<QuantityOutcome, CartError> {
        let line = self.line_mut(key)?;
        let clamp = if line.quantity <= 1 {
            Some(Clamp::AtMinimum)
        } else {
            line.quantity -= 1;
            None
        };
        Ok(line.outcome(clamp))
    }

    /// Sets the quantity, clamped into `[1, stock_limit]`. Missing input means 1.
    pub fn set_quantity(
        &mut self,
        key: &CartKey,
        value: Option<i64>,
    ) -> Result<QuantityOutcome, CartError> {
        let line = self.line_mut(key)?;
        let limit = line.item.stock_limit.max(1);
        let wanted = value.unwrap_or(1);

        let (quantity, clamp) = if wanted < 1 {
            (1, Some(Clamp::AtMinimum))
        } else if wanted > i64::from(limit) {
            (limit, Some(Clamp::AtStockLimit(limit)))
        } else {
            // bounded by `limit` above
            (wanted as u32, None)
        };
        line.quantity = quantity;
        Ok(line.outcome(clamp))
    }

    /// Returns whether a line was removed.
    pub fn remove(&mut self, key: &CartKey) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| &line.key != key);
        self.lines.len() != before
    }

    /// Empties the cart and returns how many lines were dropped.
    pub fn clear(&mut self) -> usize {
        let removed = self.lines.len();
        self.lines.clear();
        removed
    }

    /// Takes `submitted` quantities off their lines after an order went through.
    ///
    /// A line keeps whatever was added beyond its submitted quantity and lines with
    /// nothing left are removed. Lines missing from `submitted` are untouched. Returns
    /// how many lines were removed.
    pub fn settle(&mut self, submitted: &[(CartKey, u32)]) -> usize {
        let before = self.lines.len();
        for (key, quantity) in submitted {
            if let Some(i) = self.position(key) {
                let left = self.lines[i].quantity.saturating_sub(*quantity);
                if left == 0 {
                    self.lines.remove(i);
                } else {
                    self.lines[i].quantity = left;
                }
            }
        }
        before - self.lines.len()
    }

    /// Sum of `quantity * unit_price`, recomputed on every call.
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    fn position(&self, key: &CartKey) -> Option<usize> {
        self.lines.iter().position(|line| &line.key == key)
    }

    fn line_mut(&mut self, key: &CartKey) -> Result<&mut CartLine, CartError> {
        self.lines
            .iter_mut()
            .find(|line| &line.key == key)
            .ok_or_else(|| CartError::LineNotFound(key.clone()))
    }
}

impl CartLine {
    fn outcome(&self, clamp: Option<Clamp>) -> QuantityOutcome {
        QuantityOutcome {
            key: self.key.clone(),
            quantity: self.quantity,
            clamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, name: &str, price: Decimal, stock: u32) -> CartItem {
        CartItem {
            variant_id: VariantId(id),
            sku: None,
            product_name: "Frappe".to_string(),
            variant_name: name.to_string(),
            unit_price: price,
            barcode: None,
            image_url: None,
            stock_limit: stock,
        }
    }

    fn assert_bounds(cart: &Cart) {
        for line in cart.lines() {
            assert!(
                line.quantity() >= 1 && line.quantity() <= line.item.stock_limit,
                "line {} has quantity {} outside [1, {}]",
                line.key,
                line.quantity(),
                line.item.stock_limit
            );
        }
    }

    #[test]
    fn test_key_prefers_variant_name_then_sku() {
        assert_eq!(CartKey::new(VariantId(7), Some("Grande"), Some("SKU-7")).as_str(), "7-Grande");
        assert_eq!(CartKey::new(VariantId(7), Some("  "), Some("SKU-7")).as_str(), "7-SKU-7");
        assert_eq!(CartKey::new(VariantId(7), None, None).as_str(), "7");
    }

    #[test]
    fn test_add_on_empty_cart_clamps_to_stock_and_reports_shortfall() {
        let mut cart = Cart::new();
        let outcome = cart.add(item(3, "C", Decimal::from(100), 3), 5);

        assert_eq!(outcome.quantity, 3);
        assert_eq!(outcome.added, 3);
        assert_eq!(
            outcome.shortfall,
            Some(StockShortfall {
                requested: 5,
                available: 3,
                shortfall: 2
            })
        );
        assert_eq!(cart.line(&outcome.key).map(CartLine::quantity), Some(3));
    }

    #[test]
    fn test_add_at_stock_limit_leaves_quantity_and_reports() {
        let mut cart = Cart::new();
        cart.add(item(1, "A", Decimal::from(10), 2), 2);

        let outcome = cart.add(item(1, "A", Decimal::from(10), 2), 1);

        assert_eq!(outcome.quantity, 2);
        assert_eq!(outcome.added, 0);
        assert!(outcome.is_insufficient());
        assert_eq!(cart.total_units(), 2);
    }

    #[test]
    fn test_add_merges_same_key() {
        let mut cart = Cart::new();
        cart.add(item(1, "A", Decimal::from(10), 10), 2);
        let outcome = cart.add(item(1, "A", Decimal::from(10), 10), 3);

        assert_eq!(cart.len(), 1);
        assert_eq!(outcome.quantity, 5);
        assert!(!outcome.is_insufficient());
    }

    #[test]
    fn test_add_without_stock_inserts_nothing() {
        let mut cart = Cart::new();
        let outcome = cart.add(item(1, "A", Decimal::from(10), 0), 2);

        assert!(cart.is_empty());
        assert_eq!(outcome.quantity, 0);
        assert_eq!(outcome.shortfall.map(|s| s.shortfall), Some(2));
    }

    #[test]
    fn test_add_zero_counts_as_one() {
        let mut cart = Cart::new();
        let outcome = cart.add(item(1, "A", Decimal::from(10), 4), 0);
        assert_eq!(outcome.quantity, 1);
    }

    #[test]
    fn test_decrement_floors_at_one_and_keeps_line() {
        let mut cart = Cart::new();
        let key = cart.add(item(1, "A", Decimal::from(10), 5), 2).key;

        assert_eq!(cart.decrement(&key).unwrap().quantity, 1);
        let outcome = cart.decrement(&key).unwrap();

        assert_eq!(outcome.quantity, 1);
        assert_eq!(outcome.clamp, Some(Clamp::AtMinimum));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_increment_stops_at_stock_limit() {
        let mut cart = Cart::new();
        let key = cart.add(item(1, "A", Decimal::from(10), 2), 1).key;

        assert_eq!(cart.increment(&key).unwrap().clamp, None);
        let outcome = cart.increment(&key).unwrap();

        assert_eq!(outcome.quantity, 2);
        assert_eq!(outcome.clamp, Some(Clamp::AtStockLimit(2)));
    }

    #[test]
    fn test_set_quantity_clamps_and_defaults() {
        let mut cart = Cart::new();
        let key = cart.add(item(1, "A", Decimal::from(10), 4), 1).key;

        assert_eq!(cart.set_quantity(&key, Some(9)).unwrap().quantity, 4);
        assert_eq!(cart.set_quantity(&key, Some(-3)).unwrap().quantity, 1);
        assert_eq!(cart.set_quantity(&key, Some(3)).unwrap().quantity, 3);
        assert_eq!(cart.set_quantity(&key, parse_quantity("abc")).unwrap().quantity, 1);
        assert_eq!(cart.set_quantity(&key, None).unwrap().clamp, None);
    }

    #[test]
    fn test_unknown_key_is_reported() {
        let mut cart = Cart::new();
        let key = CartKey::new(VariantId(99), None, None);

        assert!(matches!(cart.increment(&key), Err(CartError::LineNotFound(_))));
        assert!(!cart.remove(&key));
    }

    #[test]
    fn test_total_tracks_mutations() {
        let mut cart = Cart::new();
        let a = cart.add(item(1, "A", Decimal::from(1000), 5), 2).key;
        cart.add(item(2, "B", Decimal::from(500), 5), 1);

        assert_eq!(cart.total(), Decimal::from(2500));
        assert!(cart.remove(&a));
        assert_eq!(cart.total(), Decimal::from(500));
    }

    #[test]
    fn test_clear_empties_any_cart() {
        let mut cart = Cart::new();
        cart.add(item(1, "A", Decimal::from(10), 5), 2);
        cart.add(item(2, "B", Decimal::from(20), 5), 1);

        assert_eq!(cart.clear(), 2);
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn test_settle_keeps_what_was_added_after_the_snapshot() {
        let mut cart = Cart::new();
        cart.add(item(1, "Chico", Decimal::new(35, 0), 10), 2);
        cart.add(item(2, "Grande", Decimal::new(55, 0), 10), 1);
        let submitted: Vec<(CartKey, u32)> = cart
            .lines()
            .iter()
            .map(|line| (line.key.clone(), line.quantity()))
            .collect();

        cart.add(item(1, "Chico", Decimal::new(35, 0), 10), 1);
        cart.add(item(3, "Mediano", Decimal::new(45, 0), 10), 1);

        assert_eq!(cart.settle(&submitted), 1);
        let left: Vec<(&str, u32)> = cart
            .lines()
            .iter()
            .map(|line| (line.key.as_str(), line.quantity()))
            .collect();
        assert_eq!(left, vec![("1-Chico", 1), ("3-Mediano", 1)]);
        assert_bounds(&cart);
    }

    #[test]
    fn test_quantity_bounds_hold_for_long_mixed_sequences() {
        let mut cart = Cart::new();
        let items = [
            item(1, "A", Decimal::from(5), 1),
            item(2, "B", Decimal::new(75, 1), 3),
            item(3, "C", Decimal::from(12), 8),
        ];
        let mut seed: u64 = 0x2545_f491;

        for _ in 0..2_000 {
            seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            let pick = (seed >> 33) as usize;
            let target = items[pick % items.len()].clone();
            let key = target.key();
            let amount = (pick / 7 % 12) as i64 - 2;

            match pick % 5 {
                0 => {
                    cart.add(target, amount.max(0) as u32);
                }
                1 => {
                    let _ = cart.increment(&key);
                }
                2 => {
                    let _ = cart.decrement(&key);
                }
                3 => {
                    let _ = cart.set_quantity(&key, Some(amount));
                }
                _ => {
                    if pick % 11 == 0 {
                        cart.remove(&key);
                    }
                }
            }

            assert_bounds(&cart);
            let expected: Decimal = cart
                .lines()
                .iter()
                .map(|l| l.item.unit_price * Decimal::from(l.quantity()))
                .sum();
            assert_eq!(cart.total(), expected);
        }
    }
}
