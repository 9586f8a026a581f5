//! Address repository, including the single-default invariant.
//!
//! At most one address per user may carry `is_default`. Every write that
//! sets the flag first clears it across the user's other rows, inside the
//! same transaction, so no interleaving can observe two defaults.

use sqlx::MySqlPool;

use minimart_core::{AddressId, UserId};

use super::{RepositoryError, insert_id};
use crate::models::Address;

const ADDRESS_COLUMNS: &str =
    "address_id, user_id, receiver_name, phone_number, street_address, city, is_default";

/// Fields for creating or updating an address.
#[derive(Debug, Clone)]
pub struct AddressFields<'f> {
    pub receiver_name: &'f str,
    pub phone_number: &'f str,
    pub street_address: &'f str,
    pub city: &'f str,
    pub is_default: bool,
}

/// Repository for address database operations.
pub struct AddressRepository<'a> {
    pool: &'a MySqlPool,
}

impl<'a> AddressRepository<'a> {
    /// Create a new address repository.
    #[must_use]
    pub const fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// List a user's addresses, default first, then newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Address>, RepositoryError> {
        let addresses = sqlx::query_as::<_, Address>(&format!(
            "SELECT {ADDRESS_COLUMNS} FROM addresses \
             WHERE user_id = ? \
             ORDER BY is_default DESC, address_id DESC"
        ))
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(addresses)
    }

    /// Get a single address by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: AddressId) -> Result<Option<Address>, RepositoryError> {
        let address = sqlx::query_as::<_, Address>(&format!(
            "SELECT {ADDRESS_COLUMNS} FROM addresses WHERE address_id = ?"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(address)
    }

    /// Create an address. If it is marked default, the user's other
    /// addresses are un-defaulted in the same transaction.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any statement fails; the
    /// transaction is rolled back.
    pub async fn create(
        &self,
        user_id: UserId,
        fields: AddressFields<'_>,
    ) -> Result<AddressId, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        if fields.is_default {
            sqlx::query("UPDATE addresses SET is_default = 0 WHERE user_id = ?")
                .bind(user_id)
                .execute(&mut *tx)
                .await?;
        }

        let result = sqlx::query(
            "INSERT INTO addresses (user_id, receiver_name, phone_number, street_address, city, is_default) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(user_id)
        .bind(fields.receiver_name)
        .bind(fields.phone_number)
        .bind(fields.street_address)
        .bind(fields.city)
        .bind(fields.is_default)
        .execute(&mut *tx)
        .await?;

        let id = AddressId::new(insert_id(result.last_insert_id())?);

        tx.commit().await?;

        Ok(id)
    }

    /// Update an address. If it is being marked default, the owning user's
    /// addresses are all un-defaulted first; the update then restores the
    /// flag on the edited row. Both steps share one transaction, so the
    /// intermediate no-default state is never observable.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the address doesn't exist.
    /// Returns `RepositoryError::Database` if any statement fails; the
    /// transaction is rolled back.
    pub async fn update(
        &self,
        id: AddressId,
        fields: AddressFields<'_>,
    ) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let user_id =
            sqlx::query_scalar::<_, i32>("SELECT user_id FROM addresses WHERE address_id = ?")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or(RepositoryError::NotFound)?;

        if fields.is_default {
            sqlx::query("UPDATE addresses SET is_default = 0 WHERE user_id = ?")
                .bind(user_id)
                .execute(&mut *tx)
                .await?;
        }

        sqlx::query(
            "UPDATE addresses \
             SET receiver_name = ?, phone_number = ?, street_address = ?, city = ?, is_default = ? \
             WHERE address_id = ?",
        )
        .bind(fields.receiver_name)
        .bind(fields.phone_number)
        .bind(fields.street_address)
        .bind(fields.city)
        .bind(fields.is_default)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(())
    }

    /// Delete an address.
    ///
    /// # Returns
    ///
    /// Returns `true` if the address was deleted, `false` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: AddressId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM addresses WHERE address_id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::test_support::seed_user;

    const fn fields(receiver_name: &str, is_default: bool) -> AddressFields<'_> {
        AddressFields {
            receiver_name,
            phone_number: "0900000001",
            street_address: "12 Mission St",
            city: "Hanoi",
            is_default,
        }
    }

    #[sqlx::test]
    #[ignore = "requires a MySQL server (set DATABASE_URL)"]
    async fn test_at_most_one_default_per_user(pool: MySqlPool) {
        let user_id = seed_user(&pool, "addresses@example.com").await;
        let repo = AddressRepository::new(&pool);

        let first = repo.create(user_id, fields("Alice", true)).await.unwrap();
        let second = repo.create(user_id, fields("Bob", true)).await.unwrap();

        // Creating a second default cleared the first.
        let addresses = repo.list_for_user(user_id).await.unwrap();
        assert_eq!(addresses.len(), 2);
        assert_eq!(addresses.iter().filter(|a| a.is_default).count(), 1);
        assert_eq!(addresses[0].address_id, second);
        assert!(addresses[0].is_default);

        // Updating the first back to default moves the flag, never copies it.
        repo.update(first, fields("Alice", true)).await.unwrap();
        let addresses = repo.list_for_user(user_id).await.unwrap();
        assert_eq!(addresses.iter().filter(|a| a.is_default).count(), 1);
        assert_eq!(addresses[0].address_id, first);
    }

    #[sqlx::test]
    #[ignore = "requires a MySQL server (set DATABASE_URL)"]
    async fn test_non_default_update_leaves_flag_alone(pool: MySqlPool) {
        let user_id = seed_user(&pool, "addresses2@example.com").await;
        let repo = AddressRepository::new(&pool);

        let home = repo.create(user_id, fields("Alice", true)).await.unwrap();
        let office = repo.create(user_id, fields("Alice", false)).await.unwrap();

        repo.update(office, fields("Alice at work", false)).await.unwrap();

        let addresses = repo.list_for_user(user_id).await.unwrap();
        assert_eq!(addresses[0].address_id, home);
        assert!(addresses[0].is_default);
    }

    #[sqlx::test]
    #[ignore = "requires a MySQL server (set DATABASE_URL)"]
    async fn test_update_missing_address_is_not_found(pool: MySqlPool) {
        let err = AddressRepository::new(&pool)
            .update(AddressId::new(9999), fields("Nobody", true))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));
    }
}
