//! Order submission: turn the session cart into a server-side order.

use crate::api::{ApiError, OrderApi};
use crate::cart_actor::CartError;
use crate::clients::CartClient;
use crate::model::{
    NewOrder, NewOrderLine, OrderId, OrderKind, PaymentMethodId, StatusCatalog, StatusName,
};
use actor_framework::ActorClient;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PlacementError {
    #[error("Choose a payment method")]
    MissingPaymentMethod,

    #[error("The cart is empty")]
    EmptyCart,

    /// The server's status enumeration has no entry with this name.
    #[error("Unknown order status: {0}")]
    MissingStatus(StatusName),

    #[error(transparent)]
    Api(#[from] ApiError),

    /// The order shell exists on the server but one of its lines was refused.
    #[error("Order {order_id} was created but a line was rejected: {source}")]
    LineRejected {
        order_id: OrderId,
        #[source]
        source: ApiError,
    },

    #[error(transparent)]
    Cart(#[from] CartError),
}

/// Everything the checkout form collects besides the cart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacementRequest {
    pub payment_method: Option<PaymentMethodId>,
    pub notes: Option<String>,
    pub table: Option<u32>,
    pub customer_id: Option<u32>,
    pub employee_id: Option<u32>,
    /// Initial status; `Pendiente` when absent.
    pub status: Option<StatusName>,
    pub kind: Option<OrderKind>,
}

impl PlacementRequest {
    /// A storefront checkout.
    pub fn customer(payment_method: Option<PaymentMethodId>, notes: Option<String>) -> Self {
        Self {
            payment_method,
            notes,
            kind: Some(OrderKind::External),
            ..Self::default()
        }
    }

    /// An order taken at a table.
    pub fn waiter(
        payment_method: Option<PaymentMethodId>,
        table: u32,
        employee_id: Option<u32>,
    ) -> Self {
        Self {
            payment_method,
            table: Some(table),
            employee_id,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedOrder {
    pub order_id: OrderId,
    pub lines: usize,
}

pub struct OrderPlacement {
    cart: CartClient,
    api: Arc<dyn OrderApi>,
}

impl OrderPlacement {
    pub fn new(cart: CartClient, api: Arc<dyn OrderApi>) -> Self {
        Self { cart, api }
    }

    /// Submits the cart. On any failure the cart is left as it was; on success only
    /// the submitted lines leave it.
    #[instrument(skip(self, request), fields(payment_method = ?request.payment_method))]
    pub async fn place(&self, request: PlacementRequest) -> Result<PlacedOrder, PlacementError> {
        let payment_method = request
            .payment_method
            .ok_or(PlacementError::MissingPaymentMethod)?;
        let cart = self.cart.snapshot().await?;
        if cart.is_empty() {
            return Err(PlacementError::EmptyCart);
        }

        let status_name = request.status.unwrap_or_else(StatusName::pending);
        let catalog = StatusCatalog::new(self.api.statuses().await?);
        let status_id = catalog
            .id_of(status_name.as_str())
            .ok_or_else(|| PlacementError::MissingStatus(status_name.clone()))?;

        let created = self
            .api
            .create_order(&NewOrder {
                metodo_pago_id: payment_method,
                tipo: request.kind,
                estado_id: status_id,
                mesa: request.table,
                cliente: request.customer_id,
                empleado: request.employee_id,
                notas: request.notes.filter(|notes| !notes.trim().is_empty()),
            })
            .await?;

        for line in cart.lines() {
            let new_line = NewOrderLine {
                pedido_id: created.id,
                variante_id: line.item.variant_id,
                cantidad: line.quantity(),
                precio_unitario: line.item.unit_price,
                notas: String::new(),
                tipo: request.kind,
            };
            if let Err(source) = self.api.add_line(&new_line).await {
                warn!(order_id = %created.id, key = %line.key, %source, "Order line rejected");
                return Err(PlacementError::LineRejected {
                    order_id: created.id,
                    source,
                });
            }
        }

        let submitted = cart
            .lines()
            .iter()
            .map(|line| (line.key.clone(), line.quantity()))
            .collect();
        self.cart.settle(submitted).await?;
        info!(order_id = %created.id, lines = cart.len(), "Order placed");
        Ok(PlacedOrder {
            order_id: created.id,
            lines: cart.len(),
        })
    }
}
