//! Cart repository.
//!
//! Adding to the cart is a single upsert backed by the unique
//! `(user_id, product_id)` key, so two concurrent adds for the same pair
//! cannot race into duplicate rows or lost increments.

use sqlx::MySqlPool;

use minimart_core::{CartItemId, ProductId, UserId};

use super::RepositoryError;
use crate::models::CartLine;

/// Repository for cart database operations.
pub struct CartRepository<'a> {
    pool: &'a MySqlPool,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// List a user's cart lines joined with product data.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<CartLine>, RepositoryError> {
        let lines = sqlx::query_as::<_, CartLine>(
            "SELECT c.cart_item_id, c.product_id, c.quantity, \
                    p.product_name, p.price, p.thumbnail_url \
             FROM cart_items c \
             JOIN products p ON c.product_id = p.product_id \
             WHERE c.user_id = ?",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(lines)
    }

    /// Add a product to the cart, or increment its quantity if already there.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn add(
        &self,
        user_id: UserId,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO cart_items (user_id, product_id, quantity) VALUES (?, ?, ?) \
             ON DUPLICATE KEY UPDATE quantity = quantity + VALUES(quantity)",
        )
        .bind(user_id)
        .bind(product_id)
        .bind(quantity)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Set the quantity of a cart line.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn update_quantity(
        &self,
        cart_item_id: CartItemId,
        quantity: i32,
    ) -> Result<(), RepositoryError> {
        sqlx::query("UPDATE cart_items SET quantity = ? WHERE cart_item_id = ?")
            .bind(quantity)
            .bind(cart_item_id)
            .execute(self.pool)
            .await?;

        Ok(())
    }

    /// Remove a cart line.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn remove(&self, cart_item_id: CartItemId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM cart_items WHERE cart_item_id = ?")
            .bind(cart_item_id)
            .execute(self.pool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::test_support::{seed_product, seed_user};
    use rust_decimal::Decimal;

    #[sqlx::test]
    #[ignore = "requires a MySQL server (set DATABASE_URL)"]
    async fn test_add_twice_increments_a_single_line(pool: MySqlPool) {
        let user_id = seed_user(&pool, "cart@example.com").await;
        let product_id = seed_product(&pool, "Soil moisture sensor", Decimal::new(1000, 2)).await;
        let repo = CartRepository::new(&pool);

        repo.add(user_id, product_id, 1).await.unwrap();
        repo.add(user_id, product_id, 3).await.unwrap();

        let lines = repo.list_for_user(user_id).await.unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 4);
    }

    #[sqlx::test]
    #[ignore = "requires a MySQL server (set DATABASE_URL)"]
    async fn test_update_and_remove_line(pool: MySqlPool) {
        let user_id = seed_user(&pool, "cart2@example.com").await;
        let product_id = seed_product(&pool, "Rain gauge", Decimal::new(500, 2)).await;
        let repo = CartRepository::new(&pool);

        repo.add(user_id, product_id, 2).await.unwrap();
        let line = repo.list_for_user(user_id).await.unwrap().remove(0);

        repo.update_quantity(line.cart_item_id, 5).await.unwrap();
        let lines = repo.list_for_user(user_id).await.unwrap();
        assert_eq!(lines[0].quantity, 5);

        repo.remove(line.cart_item_id).await.unwrap();
        assert!(repo.list_for_user(user_id).await.unwrap().is_empty());
    }
}
