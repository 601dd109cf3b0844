//! # Session
//!
//! A logged-in session: the actors it owns, the backend it talks to, and their
//! lifecycle. Everything a view needs is reached through a [`Session`] rather than
//! through globals.
//!
//! ## Startup
//!
//! The credentials actor starts first because the backend client needs its client
//! injected. The board client shares the backend; the board actor itself never talks
//! to it.
//!
//! ## Shutdown
//!
//! Stop every [`PollHandle`](super::PollHandle) and drop any [`StaffDesk`] before
//! calling [`Session::shutdown`]; they hold board clients and keep the board actor
//! alive.

use super::poller::{BoardEvent, OrderPoller, PollHandle};
use crate::api::{
    ApiError, AuthClient, HttpOrderApi, HttpTokenRefresher, OrderApi, ReqwestTransport,
    SessionEvent, TerminationReason,
};
use crate::board_actor::BoardError;
use crate::cart_actor::CartError;
use crate::clients::{BoardClient, CartClient, CredentialsClient};
use crate::config::ClientConfig;
use crate::credentials_actor::CredentialsError;
use crate::model::{AddOutcome, CartItem, MenuVariant, Role};
use crate::workflows::{
    Confirmation, OrderPlacement, PlacedOrder, PlacementError, PlacementRequest, StaffDesk,
};
use crate::{board_actor, cart_actor, credentials_actor};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tracing::{error, info, instrument};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Credentials(#[from] CredentialsError),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// What the backend builder receives from the session.
pub struct SessionWiring {
    pub credentials: CredentialsClient,
    pub events: broadcast::Sender<SessionEvent>,
}

pub struct Session {
    pub cart: CartClient,
    pub credentials: CredentialsClient,
    pub board: BoardClient,
    api: Arc<dyn OrderApi>,
    role: Role,
    media_base: String,
    events: broadcast::Sender<SessionEvent>,
    handles: Vec<JoinHandle<()>>,
}

impl Session {
    /// Starts the session's actors around the backend returned by `build_api`.
    pub fn start<F>(role: Role, token: Option<String>, build_api: F) -> Self
    where
        F: FnOnce(SessionWiring) -> Arc<dyn OrderApi>,
    {
        let (credentials_actor, credentials) = credentials_actor::new(token);
        let credentials_handle = tokio::spawn(credentials_actor.run(()));

        let (events, _) = broadcast::channel(16);
        let api = build_api(SessionWiring {
            credentials: credentials.clone(),
            events: events.clone(),
        });

        let (cart_actor, cart) = cart_actor::new();
        let cart_handle = tokio::spawn(cart_actor.run(()));

        let (board_actor, board) = board_actor::new(Arc::clone(&api));
        let board_handle = tokio::spawn(board_actor.run(()));

        info!(%role, "Session started");
        Self {
            cart,
            credentials,
            board,
            api,
            role,
            media_base: String::new(),
            events,
            // shutdown order: board clients share a backend holding a credentials client
            handles: vec![cart_handle, board_handle, credentials_handle],
        }
    }

    /// Starts a session against the HTTP backend described by `config`.
    pub fn connect(config: &ClientConfig) -> Result<Self, SessionError> {
        let transport = Arc::new(ReqwestTransport::new(&config.api_url, config.timeout())?);
        let refresher = Arc::new(HttpTokenRefresher::new(
            Arc::clone(&transport),
            config.refresh_path.clone(),
            config.refresh_token.clone(),
        ));

        let session = Self::start(config.role, config.token.clone(), |wiring| {
            let client = AuthClient::new(transport, wiring.credentials, refresher, wiring.events);
            let api: Arc<dyn OrderApi> = Arc::new(HttpOrderApi::new(client));
            api
        });
        Ok(session.with_media_base(config.media_base()))
    }

    /// Base URL for resolving relative product image paths.
    pub fn with_media_base(mut self, media_base: impl Into<String>) -> Self {
        self.media_base = media_base.into();
        self
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn api(&self) -> Arc<dyn OrderApi> {
        Arc::clone(&self.api)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    pub async fn menu(&self) -> Result<Vec<MenuVariant>, ApiError> {
        self.api.menu().await
    }

    /// Adds a menu variant to the cart, capped by its currently available stock.
    pub async fn add_to_cart(
        &self,
        variant: &MenuVariant,
        quantity: u32,
    ) -> Result<AddOutcome, CartError> {
        self.cart
            .add(CartItem::from_variant(variant, &self.media_base), quantity)
            .await
    }

    pub async fn place_order(&self, request: PlacementRequest) -> Result<PlacedOrder, PlacementError> {
        OrderPlacement::new(self.cart.clone(), self.api()).place(request).await
    }

    /// Starts the role's poller.
    pub fn watch_orders(&self, interval: Duration) -> (PollHandle, mpsc::Receiver<BoardEvent>) {
        OrderPoller::start(
            self.board.clone(),
            self.role.poll_scopes(),
            interval,
            self.role.announces_ready(),
        )
    }

    pub fn staff_desk(&self, confirmer: Arc<dyn Confirmation>) -> StaffDesk {
        StaffDesk::new(self.role, self.api(), self.board.clone(), confirmer)
    }

    /// Ends the session locally: forgets the token, the cart and every snapshot, and
    /// tells subscribers to return to login.
    #[instrument(skip(self), fields(role = %self.role))]
    pub async fn logout(&self) -> Result<(), SessionError> {
        self.credentials.clear().await?;
        self.cart.clear().await?;
        self.board.reset().await?;
        let _ = self
            .events
            .send(SessionEvent::Terminated(TerminationReason::LoggedOut));
        info!("Logged out");
        Ok(())
    }

    /// Drops the session's clients and waits for every actor to stop.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down session...");

        drop(self.cart);
        drop(self.board);
        drop(self.api);
        drop(self.credentials);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Session shutdown complete.");
        Ok(())
    }
}
