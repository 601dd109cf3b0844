//! Typed order endpoints.

use super::auth::AuthClient;
use super::error::ApiError;
use super::transport::{ApiRequest, HttpTransport};
use crate::model::{
    CreatedOrder, MenuVariant, NewOrder, NewOrderLine, OrderId, OrderScope, OrderStatus,
    OrderSummary, PaymentMethod, StatusId,
};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{info, instrument};

pub mod paths {
    pub const ORDERS: &str = "pedidos/pedidos/";
    pub const MY_RECENT_ORDERS: &str = "pedidos/mis-pedidos/ultimos-15-dias/";
    pub const MY_ORDERS: &str = "pedidos/mis-pedidos/todos/";
    pub const ORDER_LINES: &str = "pedidos/detalles/";
    pub const PAYMENT_METHODS: &str = "pedidos/metodos-pago/";
    pub const STATUSES: &str = "pedidos/estados/";
    pub const VARIANTS: &str = "productos/variantes/";

    pub fn order(id: super::OrderId) -> String {
        format!("{ORDERS}{}/", id.0)
    }
}

/// Backend operations the client core depends on.
#[async_trait]
pub trait OrderApi: Send + Sync {
    async fn list_orders(&self, scope: OrderScope) -> Result<Vec<OrderSummary>, ApiError>;
    async fn statuses(&self) -> Result<Vec<OrderStatus>, ApiError>;
    async fn payment_methods(&self) -> Result<Vec<PaymentMethod>, ApiError>;
    async fn create_order(&self, order: &NewOrder) -> Result<CreatedOrder, ApiError>;
    async fn add_line(&self, line: &NewOrderLine) -> Result<(), ApiError>;
    async fn set_status(&self, order: OrderId, status: StatusId) -> Result<(), ApiError>;
    async fn menu(&self) -> Result<Vec<MenuVariant>, ApiError>;
}

/// The list request for `scope`. Day scopes resolve the calendar day now.
pub fn scope_request(scope: OrderScope) -> ApiRequest {
    match scope {
        OrderScope::Today => ApiRequest::get(paths::ORDERS),
        OrderScope::Recent => ApiRequest::get(paths::MY_RECENT_ORDERS),
        OrderScope::All => ApiRequest::get(paths::MY_ORDERS),
        OrderScope::Day(day) => {
            ApiRequest::get(paths::ORDERS).with_query("fecha", day.resolve().to_string())
        }
    }
}

/// Lists come back either bare or wrapped in a paginated envelope.
#[derive(Deserialize)]
#[serde(untagged)]
enum Listing<T> {
    Plain(Vec<T>),
    Paged { results: Vec<T> },
}

impl<T> Listing<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            Listing::Plain(items) | Listing::Paged { results: items } => items,
        }
    }
}

pub struct HttpOrderApi<T> {
    client: AuthClient<T>,
}

impl<T: HttpTransport> HttpOrderApi<T> {
    pub fn new(client: AuthClient<T>) -> Self {
        Self { client }
    }

    async fn list<R: serde::de::DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<Vec<R>, ApiError> {
        Ok(self.client.send_json::<Listing<R>>(request).await?.into_vec())
    }
}

#[async_trait]
impl<T: HttpTransport> OrderApi for HttpOrderApi<T> {
    #[instrument(skip(self), fields(scope = %scope))]
    async fn list_orders(&self, scope: OrderScope) -> Result<Vec<OrderSummary>, ApiError> {
        self.list(scope_request(scope)).await
    }

    async fn statuses(&self) -> Result<Vec<OrderStatus>, ApiError> {
        self.list(ApiRequest::get(paths::STATUSES)).await
    }

    async fn payment_methods(&self) -> Result<Vec<PaymentMethod>, ApiError> {
        self.list(ApiRequest::get(paths::PAYMENT_METHODS)).await
    }

    #[instrument(skip(self, order), fields(payment_method = order.metodo_pago_id.0))]
    async fn create_order(&self, order: &NewOrder) -> Result<CreatedOrder, ApiError> {
        let created: CreatedOrder = self
            .client
            .send_json(ApiRequest::post(paths::ORDERS, order)?)
            .await?;
        info!(order_id = %created.id, "Order created");
        Ok(created)
    }

    #[instrument(skip(self, line), fields(order_id = %line.pedido_id, variant_id = line.variante_id.0))]
    async fn add_line(&self, line: &NewOrderLine) -> Result<(), ApiError> {
        self.client
            .send(ApiRequest::post(paths::ORDER_LINES, line)?)
            .await?;
        Ok(())
    }

    #[instrument(skip(self), fields(order_id = %order, status_id = status.0))]
    async fn set_status(&self, order: OrderId, status: StatusId) -> Result<(), ApiError> {
        self.client
            .send(ApiRequest::patch(
                paths::order(order),
                &serde_json::json!({ "estado_id": status }),
            )?)
            .await?;
        info!("Order status updated");
        Ok(())
    }

    async fn menu(&self) -> Result<Vec<MenuVariant>, ApiError> {
        self.list(ApiRequest::get(paths::VARIANTS)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DaySelector;
    use jiff::civil::date;

    #[test]
    fn test_scope_requests() {
        assert_eq!(scope_request(OrderScope::Today).path, paths::ORDERS);
        assert!(scope_request(OrderScope::Today).query.is_empty());
        assert_eq!(scope_request(OrderScope::Recent).path, paths::MY_RECENT_ORDERS);
        assert_eq!(scope_request(OrderScope::All).path, paths::MY_ORDERS);

        let day = scope_request(OrderScope::Day(DaySelector::On(date(2025, 3, 7))));
        assert_eq!(day.path, paths::ORDERS);
        assert_eq!(day.query, vec![("fecha".to_string(), "2025-03-07".to_string())]);
    }

    #[test]
    fn test_order_path() {
        assert_eq!(paths::order(OrderId(42)), "pedidos/pedidos/42/");
    }

    #[test]
    fn test_listing_accepts_both_shapes() {
        let plain: Listing<PaymentMethod> =
            serde_json::from_str(r#"[{"id": 1, "nombre": "Efectivo"}]"#).unwrap();
        let paged: Listing<PaymentMethod> =
            serde_json::from_str(r#"{"count": 1, "results": [{"id": 1, "nombre": "Efectivo"}]}"#)
                .unwrap();
        assert_eq!(plain.into_vec(), paged.into_vec());
    }
}
