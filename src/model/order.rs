//! Orders as the backend serves and accepts them.
//!
//! Field names follow the backend's JSON. Summaries are read-only: a status change
//! is only learned by fetching again.

use super::menu::VariantId;
use super::status::{StatusId, StatusName, StatusRef};
use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentMethodId(pub u32);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: PaymentMethodId,
    #[serde(rename = "nombre")]
    pub name: String,
}

/// Where an order comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderKind {
    /// Placed by a customer from the storefront.
    #[default]
    #[serde(rename = "externo")]
    External,
    /// Taken in store. The backend assigns this when no kind is sent.
    #[serde(other, rename = "tienda")]
    InStore,
}

/// Variant as embedded in an order line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LineVariant {
    #[serde(default)]
    pub producto_nombre: Option<String>,
    #[serde(default)]
    pub nombre_variante: Option<String>,
    #[serde(default)]
    pub nombre_completo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderLine {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(rename = "variante", default)]
    pub variant: LineVariant,
    #[serde(rename = "cantidad")]
    pub quantity: u32,
    #[serde(rename = "precio_unitario")]
    pub unit_price: Decimal,
    #[serde(rename = "notas", default)]
    pub notes: Option<String>,
}

impl OrderLine {
    pub fn variant_display_name(&self) -> String {
        let v = &self.variant;
        if let Some(full) = v.nombre_completo.as_deref().filter(|s| !s.trim().is_empty()) {
            return full.to_string();
        }
        match (v.producto_nombre.as_deref(), v.nombre_variante.as_deref()) {
            (Some(product), Some(variant)) => format!("{product} - {variant}"),
            (Some(name), None) | (None, Some(name)) => name.to_string(),
            (None, None) => "Producto".to_string(),
        }
    }

    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// A viewer's projection of a server-side order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderSummary {
    pub id: OrderId,
    #[serde(rename = "estado", default)]
    pub status: StatusRef,
    #[serde(rename = "mesa", default)]
    pub table: Option<u32>,
    #[serde(rename = "cliente_nombre", default)]
    pub customer_name: Option<String>,
    #[serde(rename = "notas", default)]
    pub notes: Option<String>,
    #[serde(rename = "fecha_pedido")]
    pub placed_at: Timestamp,
    #[serde(default)]
    pub total: Decimal,
    #[serde(rename = "metodo_pago", default)]
    pub payment_method: Option<PaymentMethod>,
    #[serde(rename = "tipo", default)]
    pub kind: Option<OrderKind>,
    #[serde(rename = "detalles", default)]
    pub lines: Vec<OrderLine>,
}

impl OrderSummary {
    pub fn status_name(&self) -> &StatusName {
        &self.status.name
    }

    pub fn payment_method_name(&self) -> &str {
        self.payment_method
            .as_ref()
            .map(|method| method.name.as_str())
            .unwrap_or("N/A")
    }
}

/// Body of the "create order" request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewOrder {
    pub metodo_pago_id: PaymentMethodId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo: Option<OrderKind>,
    pub estado_id: StatusId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mesa: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cliente: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empleado: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notas: Option<String>,
}

/// Body of the "attach line" request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewOrderLine {
    pub pedido_id: OrderId,
    pub variante_id: VariantId,
    pub cantidad: u32,
    pub precio_unitario: Decimal,
    pub notas: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo: Option<OrderKind>,
}

/// The part of the "create order" response the client needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CreatedOrder {
    pub id: OrderId,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDER_JSON: &str = r#"{
        "id": 42,
        "estado": {"id": 1, "nombre": "Pendiente"},
        "mesa": null,
        "cliente_nombre": "ana",
        "notas": "sin azucar",
        "fecha_pedido": "2025-06-01T10:00:00-05:00",
        "total": "2500.00",
        "metodo_pago": {"id": 2, "nombre": "Nequi"},
        "tipo": "externo",
        "detalles": [
            {"id": 1, "variante": {"producto_nombre": "Frappe", "nombre_variante": "Grande"},
             "cantidad": 2, "precio_unitario": "1000.00", "notas": ""},
            {"id": 2, "variante": {"nombre_completo": "Malteada Fresa"},
             "cantidad": 1, "precio_unitario": 500}
        ]
    }"#;

    #[test]
    fn test_order_summary_from_backend_json() {
        let order: OrderSummary = serde_json::from_str(ORDER_JSON).unwrap();

        assert_eq!(order.id, OrderId(42));
        assert_eq!(order.status_name().as_str(), "Pendiente");
        assert_eq!(order.total, Decimal::from(2500));
        assert_eq!(order.payment_method_name(), "Nequi");
        assert_eq!(order.kind, Some(OrderKind::External));
        assert_eq!(order.lines[0].variant_display_name(), "Frappe - Grande");
        assert_eq!(order.lines[1].variant_display_name(), "Malteada Fresa");
        assert_eq!(order.lines[0].line_total(), Decimal::from(2000));
    }

    #[test]
    fn test_minimal_order_uses_fallbacks() {
        let order: OrderSummary =
            serde_json::from_str(r#"{"id": 7, "fecha_pedido": "2025-06-01T15:00:00Z"}"#).unwrap();

        assert_eq!(order.status_name().as_str(), StatusName::UNKNOWN);
        assert_eq!(order.payment_method_name(), "N/A");
        assert!(order.lines.is_empty());
    }

    #[test]
    fn test_new_order_skips_absent_fields() {
        let body = serde_json::to_value(NewOrder {
            metodo_pago_id: PaymentMethodId(2),
            tipo: Some(OrderKind::External),
            estado_id: StatusId(1),
            mesa: None,
            cliente: None,
            empleado: None,
            notas: None,
        })
        .unwrap();

        assert_eq!(
            body,
            serde_json::json!({"metodo_pago_id": 2, "tipo": "externo", "estado_id": 1})
        );
    }
}
