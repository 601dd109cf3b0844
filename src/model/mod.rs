//! Data structures shared by the actors, the API client and the workflows.
//!
//! The wire types use the backend's (Spanish) JSON field names through serde renames;
//! the Rust side uses English names throughout.

pub mod board;
pub mod cart;
pub mod credentials;
pub mod menu;
pub mod order;
pub mod scope;
pub mod status;

pub use board::*;
pub use cart::*;
pub use credentials::*;
pub use menu::*;
pub use order::*;
pub use scope::*;
pub use status::*;
