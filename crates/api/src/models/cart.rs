//! Cart line model.

use rust_decimal::Decimal;
use serde::Serialize;

use minimart_core::{CartItemId, ProductId};

/// One cart row joined with its product.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub cart_item_id: CartItemId,
    pub product_id: ProductId,
    pub quantity: i32,
    pub product_name: String,
    pub price: Decimal,
    pub thumbnail_url: Option<String>,
}
