//! Review repository.

use sqlx::MySqlPool;

use minimart_core::{OrderId, ProductId, UserId};

use super::RepositoryError;
use crate::models::Review;

/// Repository for review database operations.
pub struct ReviewRepository<'a> {
    pool: &'a MySqlPool,
}

impl<'a> ReviewRepository<'a> {
    /// Create a new review repository.
    #[must_use]
    pub const fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// List reviews for a product, newest first.
    ///
    /// Reviews are attached to orders; the join through `order_details`
    /// surfaces every review whose order contained the product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_product(
        &self,
        product_id: ProductId,
    ) -> Result<Vec<Review>, RepositoryError> {
        let reviews = sqlx::query_as::<_, Review>(
            "SELECT DISTINCT r.review_id, r.rating, r.comment, r.review_date, \
                    u.full_name AS user_name \
             FROM reviews r \
             JOIN users u ON r.user_id = u.user_id \
             JOIN order_details od ON r.order_id = od.order_id \
             WHERE od.product_id = ? \
             ORDER BY r.review_date DESC",
        )
        .bind(product_id)
        .fetch_all(self.pool)
        .await?;

        Ok(reviews)
    }

    /// Add a review for a product, tied to an order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create(
        &self,
        product_id: ProductId,
        user_id: UserId,
        order_id: OrderId,
        rating: i32,
        comment: Option<&str>,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO reviews (product_id, user_id, order_id, rating, comment, review_date) \
             VALUES (?, ?, ?, ?, ?, NOW())",
        )
        .bind(product_id)
        .bind(user_id)
        .bind(order_id)
        .bind(rating)
        .bind(comment)
        .execute(self.pool)
        .await?;

        Ok(())
    }
}
