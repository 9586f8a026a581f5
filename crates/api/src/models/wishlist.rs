//! Wishlist entry model.

use rust_decimal::Decimal;
use serde::Serialize;

use minimart_core::{ProductId, WishlistId};

/// One wishlist row joined with its product.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    pub wishlist_id: WishlistId,
    pub product_id: ProductId,
    pub product_name: String,
    pub price: Decimal,
    pub thumbnail_url: Option<String>,
}
