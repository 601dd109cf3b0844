#![allow(dead_code)]

use jiff::Timestamp;
use krazz_client::api::{MockOrderApi, OrderApi};
use krazz_client::lifecycle::Session;
use krazz_client::model::{
    CartItem, OrderId, OrderStatus, OrderSummary, Role, StatusId, StatusName, StatusRef,
    VariantId,
};
use rust_decimal::Decimal;
use std::sync::Arc;

pub fn order(id: u32, status: &str) -> OrderSummary {
    OrderSummary {
        id: OrderId(id),
        status: StatusRef {
            id: None,
            name: StatusName::new(status),
        },
        table: Some(3),
        customer_name: Some("Ana".to_string()),
        notes: None,
        placed_at: Timestamp::UNIX_EPOCH,
        total: Decimal::ZERO,
        payment_method: None,
        kind: None,
        lines: Vec::new(),
    }
}

/// The backend's status enumeration, ids 1 to 5.
pub fn statuses() -> Vec<OrderStatus> {
    [
        StatusName::PENDING,
        StatusName::IN_KITCHEN,
        StatusName::READY,
        StatusName::DELIVERED,
        StatusName::CANCELLED,
    ]
    .into_iter()
    .zip(1..)
    .map(|(name, id)| OrderStatus {
        id: StatusId(id),
        name: StatusName::new(name),
    })
    .collect()
}

pub fn item(variant: u32, price: i64, stock: u32) -> CartItem {
    CartItem {
        variant_id: VariantId(variant),
        sku: None,
        product_name: format!("Product {variant}"),
        variant_name: "Mediano".to_string(),
        unit_price: Decimal::from(price),
        barcode: None,
        image_url: None,
        stock_limit: stock,
    }
}

/// A session whose backend is a strict mock.
pub fn mock_session(role: Role) -> (Session, Arc<MockOrderApi>) {
    let api = Arc::new(MockOrderApi::new());
    let backend = Arc::clone(&api);
    let session = Session::start(role, Some("token".to_string()), move |_| {
        let backend: Arc<dyn OrderApi> = backend;
        backend
    });
    (session, api)
}
