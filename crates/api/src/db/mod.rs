//! Database operations for the Minimart MySQL store.
//!
//! ## Tables
//!
//! - `users` - Mobile app accounts (argon2 password hashes)
//! - `categories`, `products`, `product_specs`, `product_images` - Catalog
//! - `addresses` - Shipping addresses with the single-default invariant
//! - `cart_items` - Per-user cart, unique per (user, product)
//! - `orders`, `order_details` - Order headers and line items
//! - `wishlist` - Favorites, unique per (user, product)
//! - `reviews` - Product reviews tied to orders
//! - `promotions`, `payment_methods`, `shipping_methods` - Reference data
//!
//! # Migrations
//!
//! Migrations live in `crates/api/migrations/` and are applied explicitly
//! (e.g. `sqlx migrate run`), never on server startup.

pub mod addresses;
pub mod cart;
pub mod catalog;
pub mod orders;
pub mod reviews;
pub mod users;
pub mod wishlist;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::MySqlPool;
use sqlx::mysql::MySqlPoolOptions;
use thiserror::Error;

pub use addresses::{AddressFields, AddressRepository};
pub use cart::CartRepository;
pub use catalog::CatalogRepository;
pub use orders::OrderRepository;
pub use reviews::ReviewRepository;
pub use users::UserRepository;
pub use wishlist::WishlistRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a MySQL connection pool with sensible defaults.
///
/// The pool is bounded at 10 connections, matching the connection limit the
/// store was provisioned for.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<MySqlPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Convert a `u64` auto-increment value into an `i32` entity id.
pub(crate) fn insert_id(raw: u64) -> Result<i32, RepositoryError> {
    i32::try_from(raw)
        .map_err(|_| RepositoryError::DataCorruption(format!("insert id {raw} out of range")))
}

/// Seed helpers for database-backed tests.
///
/// Used by the `#[sqlx::test]` tests in the repository modules (and the
/// checkout handler). Those tests run against a throwaway database that
/// sqlx creates from `DATABASE_URL` and migrates; they are `#[ignore]`d so
/// the default test run doesn't need a MySQL server:
///
/// ```bash
/// DATABASE_URL=mysql://root@localhost:3306/minimart_test \
///     cargo test -p minimart-api -- --ignored
/// ```
#[cfg(test)]
pub(crate) mod test_support {
    use rust_decimal::Decimal;
    use sqlx::MySqlPool;

    use minimart_core::{PaymentMethodId, ProductId, ShippingMethodId, UserId};

    pub async fn seed_user(pool: &MySqlPool, email: &str) -> UserId {
        let result = sqlx::query(
            "INSERT INTO users (full_name, email, password_hash, role_id, is_active, registration_date) \
             VALUES ('Test User', ?, 'x', 2, 1, NOW())",
        )
        .bind(email)
        .execute(pool)
        .await
        .expect("seed user");

        UserId::new(i32::try_from(result.last_insert_id()).expect("user id"))
    }

    pub async fn seed_product(pool: &MySqlPool, name: &str, price: Decimal) -> ProductId {
        let category = sqlx::query("INSERT INTO categories (category_name) VALUES ('Sensors')")
            .execute(pool)
            .await
            .expect("seed category");

        let result =
            sqlx::query("INSERT INTO products (product_name, category_id, price) VALUES (?, ?, ?)")
                .bind(name)
                .bind(category.last_insert_id())
                .bind(price)
                .execute(pool)
                .await
                .expect("seed product");

        ProductId::new(i32::try_from(result.last_insert_id()).expect("product id"))
    }

    pub async fn seed_payment_method(pool: &MySqlPool) -> PaymentMethodId {
        let result = sqlx::query("INSERT INTO payment_methods (method_name) VALUES ('COD')")
            .execute(pool)
            .await
            .expect("seed payment method");

        PaymentMethodId::new(i32::try_from(result.last_insert_id()).expect("payment method id"))
    }

    pub async fn seed_shipping_method(pool: &MySqlPool) -> ShippingMethodId {
        let result =
            sqlx::query("INSERT INTO shipping_methods (method_name, cost) VALUES ('Standard', 5.00)")
                .execute(pool)
                .await
                .expect("seed shipping method");

        ShippingMethodId::new(i32::try_from(result.last_insert_id()).expect("shipping method id"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_id_in_range() {
        assert!(matches!(insert_id(42), Ok(42)));
    }

    #[test]
    fn test_insert_id_out_of_range() {
        assert!(matches!(
            insert_id(u64::from(u32::MAX)),
            Err(RepositoryError::DataCorruption(_))
        ));
    }
}
