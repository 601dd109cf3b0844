//! Backend access: transport, authentication and the typed order endpoints.

pub mod auth;
pub mod error;
pub mod mock;
pub mod orders;
pub mod transport;

pub use auth::{
    AuthClient, HttpTokenRefresher, SessionEvent, TerminationReason, TokenRefresher,
    DEFAULT_REFRESH_PATH,
};
pub use error::ApiError;
pub use mock::{ApiCall, MockOrderApi};
pub use orders::{paths, scope_request, HttpOrderApi, OrderApi};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, ReqwestTransport, DEFAULT_TIMEOUT};
