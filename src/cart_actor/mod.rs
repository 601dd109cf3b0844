//! # Cart Actor
//!
//! The session's Cart Store. One actor owns the [`Cart`]; every view holds a
//! [`CartClient`], so all mutations are applied one at a time in arrival order.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Cart`]
//! - [`error`] - [`CartError`]
//! - [`actions`] - [`CartAction`] and [`CartActionResult`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use krazz_client::cart_actor;
//! use krazz_client::model::{CartItem, VariantId};
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, cart) = cart_actor::new();
//!     tokio::spawn(actor.run(()));
//!
//!     let item = CartItem {
//!         variant_id: VariantId(3),
//!         sku: None,
//!         product_name: "Frappe".into(),
//!         variant_name: "Grande".into(),
//!         unit_price: Decimal::from(1000),
//!         barcode: None,
//!         image_url: None,
//!         stock_limit: 3,
//!     };
//!     let outcome = cart.add(item, 5).await?;
//!     assert_eq!(outcome.quantity, 3);
//!     assert_eq!(outcome.shortfall.map(|s| s.shortfall), Some(2));
//!     assert_eq!(cart.total().await?, Decimal::from(3000));
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::CartClient;
use crate::model::Cart;
use actor_framework::ResourceActor;

/// Creates a new, empty Cart actor and its client.
pub fn new() -> (ResourceActor<Cart>, CartClient) {
    let (actor, generic_client) = ResourceActor::new(Cart::new(), 32);
    (actor, CartClient::new(generic_client))
}
