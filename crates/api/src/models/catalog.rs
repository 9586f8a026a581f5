//! Catalog models: products, categories, promotions, shipping methods.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

use minimart_core::{CategoryId, ProductId, ShippingMethodId};

/// Thumbnail served when a product has no stored image.
pub const PLACEHOLDER_THUMBNAIL: &str = "https://via.placeholder.com/300x300.png?text=No+Image";

/// A product as it appears in the listing.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub product_id: ProductId,
    pub product_name: String,
    pub category_id: CategoryId,
    pub price: Decimal,
    pub thumbnail_url: Option<String>,
    pub short_description: Option<String>,
    pub sensor_type: Option<String>,
}

impl ProductSummary {
    /// Substitute the placeholder for a missing thumbnail.
    pub fn apply_thumbnail_fallback(&mut self) {
        if self.thumbnail_url.is_none() {
            self.thumbnail_url = Some(PLACEHOLDER_THUMBNAIL.to_string());
        }
    }
}

/// Full product detail, including spec columns and the image gallery.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub product_id: ProductId,
    pub product_name: String,
    pub category_id: CategoryId,
    pub price: Decimal,
    pub thumbnail_url: Option<String>,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
    pub sensor_type: Option<String>,
    pub connectivity: Option<String>,
    pub power_source: Option<String>,
    /// Gallery image URLs, loaded by a second query.
    #[sqlx(skip)]
    pub gallery: Vec<String>,
}

/// A product category.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub category_id: CategoryId,
    pub category_name: String,
    pub parent_id: Option<i32>,
}

/// A promotional banner entry.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    pub promotion_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub banner_url: Option<String>,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
}

/// A shipping option.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ShippingMethod {
    pub shipping_method_id: ShippingMethodId,
    pub method_name: String,
    pub cost: Decimal,
    pub description: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn summary(thumbnail_url: Option<String>) -> ProductSummary {
        ProductSummary {
            product_id: ProductId::new(1),
            product_name: "Soil moisture sensor".to_string(),
            category_id: CategoryId::new(2),
            price: Decimal::new(1999, 2),
            thumbnail_url,
            short_description: None,
            sensor_type: Some("capacitive".to_string()),
        }
    }

    #[test]
    fn test_missing_thumbnail_gets_placeholder() {
        let mut product = summary(None);
        product.apply_thumbnail_fallback();
        assert_eq!(product.thumbnail_url.as_deref(), Some(PLACEHOLDER_THUMBNAIL));
    }

    #[test]
    fn test_stored_thumbnail_unchanged() {
        let mut product = summary(Some("https://cdn.example.com/p1.png".to_string()));
        product.apply_thumbnail_fallback();
        assert_eq!(
            product.thumbnail_url.as_deref(),
            Some("https://cdn.example.com/p1.png")
        );
    }
}
