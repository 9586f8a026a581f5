//! Catalog repository: products, categories, promotions, shipping methods.

use sqlx::MySqlPool;

use minimart_core::ProductId;

use super::RepositoryError;
use crate::models::{Category, ProductDetail, ProductSummary, Promotion, ShippingMethod};

/// Repository for read-mostly catalog data.
pub struct CatalogRepository<'a> {
    pool: &'a MySqlPool,
}

impl<'a> CatalogRepository<'a> {
    /// Create a new catalog repository.
    #[must_use]
    pub const fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// List active products, with spec info and the thumbnail fallback applied.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_products(&self) -> Result<Vec<ProductSummary>, RepositoryError> {
        let mut products = sqlx::query_as::<_, ProductSummary>(
            "SELECT p.product_id, p.product_name, p.category_id, p.price, \
                    p.thumbnail_url, p.short_description, ps.sensor_type \
             FROM products p \
             LEFT JOIN product_specs ps ON p.product_id = ps.product_id \
             WHERE p.is_active = 1",
        )
        .fetch_all(self.pool)
        .await?;

        for product in &mut products {
            product.apply_thumbnail_fallback();
        }

        Ok(products)
    }

    /// Get a product with its spec columns and image gallery.
    ///
    /// Returns `None` if the product doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn product_detail(
        &self,
        id: ProductId,
    ) -> Result<Option<ProductDetail>, RepositoryError> {
        let product = sqlx::query_as::<_, ProductDetail>(
            "SELECT p.product_id, p.product_name, p.category_id, p.price, \
                    p.thumbnail_url, p.short_description, p.description, p.is_active, \
                    ps.sensor_type, ps.connectivity, ps.power_source \
             FROM products p \
             LEFT JOIN product_specs ps ON p.product_id = ps.product_id \
             WHERE p.product_id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        let Some(mut product) = product else {
            return Ok(None);
        };

        product.gallery = sqlx::query_scalar::<_, String>(
            "SELECT image_url FROM product_images WHERE product_id = ? ORDER BY sort_order ASC",
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        Ok(Some(product))
    }

    /// List active categories.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_categories(&self) -> Result<Vec<Category>, RepositoryError> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT category_id, category_name, parent_id FROM categories WHERE is_active = 1",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    /// List active, unexpired promotions, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_promotions(&self) -> Result<Vec<Promotion>, RepositoryError> {
        let promotions = sqlx::query_as::<_, Promotion>(
            "SELECT promotion_id, title, description, banner_url, start_date, end_date \
             FROM promotions \
             WHERE is_active = 1 AND end_date >= NOW() \
             ORDER BY promotion_id DESC",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(promotions)
    }

    /// List shipping methods by ascending cost.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_shipping_methods(&self) -> Result<Vec<ShippingMethod>, RepositoryError> {
        let methods = sqlx::query_as::<_, ShippingMethod>(
            "SELECT shipping_method_id, method_name, cost, description \
             FROM shipping_methods ORDER BY cost ASC",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(methods)
    }
}
