//! Session wiring, background polling and process-wide tracing.

pub mod poller;
pub mod session;

pub use actor_framework::tracing::setup_tracing;
pub use poller::*;
pub use session::*;
