//! User-triggered flows that span the cart, the board and the backend.

pub mod placement;
pub mod staff;

pub use placement::*;
pub use staff::*;
