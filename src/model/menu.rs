//! Catalog variants as served by the menu endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for product variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantId(pub u32);

impl From<u32> for VariantId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for VariantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A purchasable variant of a product.
///
/// Customer endpoints report `stock_disponible` directly; staff endpoints report raw
/// `stock` and the units already held by open orders (`stock_bloqueado`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MenuVariant {
    pub id: VariantId,
    #[serde(rename = "nombre", alias = "producto_nombre", default)]
    pub product_name: String,
    #[serde(rename = "nombre_variante", default)]
    pub variant_name: String,
    #[serde(rename = "precio")]
    pub price: Decimal,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(rename = "codigo_barras", alias = "codigo_barra", default)]
    pub barcode: Option<String>,
    #[serde(rename = "stock_disponible", default)]
    pub stock_available: Option<u32>,
    #[serde(default)]
    pub stock: Option<u32>,
    #[serde(rename = "stock_bloqueado", default)]
    pub stock_reserved: Option<u32>,
    #[serde(rename = "imagen_variante", default)]
    pub variant_image: Option<String>,
    #[serde(rename = "imagen", alias = "imagen_producto", default)]
    pub product_image: Option<String>,
}

impl MenuVariant {
    /// Units the client may put in a cart.
    pub fn available_stock(&self) -> u32 {
        self.stock_available.unwrap_or_else(|| {
            self.stock
                .unwrap_or(0)
                .saturating_sub(self.stock_reserved.unwrap_or(0))
        })
    }

    /// Variant image, falling back to the product image.
    pub fn image_url(&self, media_base: &str) -> Option<String> {
        self.variant_image
            .as_deref()
            .or(self.product_image.as_deref())
            .and_then(|path| resolve_media_url(media_base, path))
    }
}

/// Media paths come back either absolute or relative to the backend host.
pub fn resolve_media_url(media_base: &str, path: &str) -> Option<String> {
    let path = path.trim();
    if path.is_empty() {
        return None;
    }
    if path.starts_with("http://") || path.starts_with("https://") {
        return Some(path.to_string());
    }
    Some(format!(
        "{}/{}",
        media_base.trim_end_matches('/'),
        path.trim_start_matches('/')
    ))
}
