//! # Krazz Client
//!
//! Client core of the Krazz Ice storefront: the session cart, the order board and
//! its poller, and the authenticated backend client they share.
//!
//! Session state lives in actors built on [`actor_framework`]. Each actor owns one
//! value and applies its actions one at a time; the rest of the crate talks to it
//! through a typed client.
//!
//! ## Module Tour
//!
//! - [`model`]: plain data and pure logic ([`Cart`](model::Cart),
//!   [`OrderBoard`](model::OrderBoard), statuses, wire types).
//! - [`cart_actor`], [`credentials_actor`], [`board_actor`]: the actors.
//! - [`clients`]: typed wrappers such as [`CartClient`](clients::CartClient).
//! - [`api`]: transport, the 401 refresh protocol and the order endpoints.
//! - [`workflows`]: order placement and staff status transitions.
//! - [`lifecycle`]: [`Session`](lifecycle::Session) wiring and the
//!   [`OrderPoller`](lifecycle::OrderPoller).
//! - [`config`]: flags and environment.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info KRAZZ_TOKEN=... cargo run -- --role kitchen
//! ```

pub mod api;
pub mod board_actor;
pub mod cart_actor;
pub mod clients;
pub mod config;
pub mod credentials_actor;
pub mod lifecycle;
pub mod model;
pub mod workflows;
