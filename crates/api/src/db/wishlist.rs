//! Wishlist repository.
//!
//! Toggling is a delete-then-insert inside one transaction. The unique
//! `(user_id, product_id)` key plus `INSERT IGNORE` means two concurrent
//! toggles cannot produce duplicate rows.

use sqlx::MySqlPool;

use minimart_core::{ProductId, UserId};

use super::RepositoryError;
use crate::models::WishlistItem;

/// Repository for wishlist database operations.
pub struct WishlistRepository<'a> {
    pool: &'a MySqlPool,
}

impl<'a> WishlistRepository<'a> {
    /// Create a new wishlist repository.
    #[must_use]
    pub const fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// Toggle wishlist membership for a (user, product) pair.
    ///
    /// # Returns
    ///
    /// `true` if the product is now in the wishlist, `false` if it was
    /// removed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any statement fails; the
    /// transaction is rolled back.
    pub async fn toggle(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<bool, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let removed = sqlx::query("DELETE FROM wishlist WHERE user_id = ? AND product_id = ?")
            .bind(user_id)
            .bind(product_id)
            .execute(&mut *tx)
            .await?
            .rows_affected()
            > 0;

        if !removed {
            sqlx::query(
                "INSERT IGNORE INTO wishlist (user_id, product_id, added_date) VALUES (?, ?, NOW())",
            )
            .bind(user_id)
            .bind(product_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(!removed)
    }

    /// List a user's wishlist, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<WishlistItem>, RepositoryError> {
        let items = sqlx::query_as::<_, WishlistItem>(
            "SELECT w.wishlist_id, p.product_id, p.product_name, p.price, p.thumbnail_url \
             FROM wishlist w \
             JOIN products p ON w.product_id = p.product_id \
             WHERE w.user_id = ? \
             ORDER BY w.added_date DESC",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }

    /// Check whether a (user, product) pair is in the wishlist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn contains(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<bool, RepositoryError> {
        let found = sqlx::query_scalar::<_, i32>(
            "SELECT 1 FROM wishlist WHERE user_id = ? AND product_id = ?",
        )
        .bind(user_id)
        .bind(product_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(found.is_some())
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
    async fn test_double_toggle_restores_state(pool: MySqlPool) {
        let user_id = seed_user(&pool, "wishlist@example.com").await;
        let product_id = seed_product(&pool, "Soil moisture sensor", Decimal::new(1000, 2)).await;
        let repo = WishlistRepository::new(&pool);

        assert!(repo.toggle(user_id, product_id).await.unwrap());
        assert!(repo.contains(user_id, product_id).await.unwrap());
        assert_eq!(repo.list_for_user(user_id).await.unwrap().len(), 1);

        assert!(!repo.toggle(user_id, product_id).await.unwrap());
        assert!(!repo.contains(user_id, product_id).await.unwrap());
        assert!(repo.list_for_user(user_id).await.unwrap().is_empty());
    }
}
