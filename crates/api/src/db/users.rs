//! User repository for database operations.

use sqlx::MySqlPool;

use minimart_core::{Email, UserId};

use super::{RepositoryError, insert_id};
use crate::models::User;

/// Role assigned to self-registered accounts.
const CUSTOMER_ROLE_ID: i32 = 2;

const USER_COLUMNS: &str = "user_id, full_name, email, phone, avatar_url, role_id";

/// A user row together with its password hash. Never leaves this module's
/// callers except as a split `(User, String)` pair.
#[derive(sqlx::FromRow)]
struct AuthRow {
    user_id: i32,
    full_name: String,
    email: String,
    phone: Option<String>,
    avatar_url: Option<String>,
    role_id: i32,
    password_hash: String,
}

impl AuthRow {
    fn split(self) -> (User, String) {
        (
            User {
                user_id: UserId::new(self.user_id),
                full_name: self.full_name,
                email: self.email,
                phone: self.phone,
                avatar_url: self.avatar_url,
                role_id: self.role_id,
            },
            self.password_hash,
        )
    }
}

/// Repository for user database operations.
pub struct UserRepository<'a> {
    pool: &'a MySqlPool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// Get a user by their ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE user_id = ?"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Get an active user and their password hash by email.
    ///
    /// Returns `None` if no active user has this email.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_auth_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<(User, String)>, RepositoryError> {
        let row = sqlx::query_as::<_, AuthRow>(&format!(
            "SELECT {USER_COLUMNS}, password_hash FROM users WHERE email = ? AND is_active = 1"
        ))
        .bind(email.as_str())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(AuthRow::split))
    }

    /// Create a new user with the customer role.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        full_name: &str,
        email: &Email,
        phone: Option<&str>,
        password_hash: &str,
    ) -> Result<UserId, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO users (full_name, email, phone, password_hash, role_id, is_active, registration_date) \
             VALUES (?, ?, ?, ?, ?, 1, NOW())",
        )
        .bind(full_name)
        .bind(email.as_str())
        .bind(phone)
        .bind(password_hash)
        .bind(CUSTOMER_ROLE_ID)
        .execute(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("email already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        Ok(UserId::new(insert_id(result.last_insert_id())?))
    }

    /// Update a user's name and phone, returning the refreshed record.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the user doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update_profile(
        &self,
        id: UserId,
        full_name: &str,
        phone: Option<&str>,
    ) -> Result<User, RepositoryError> {
        sqlx::query("UPDATE users SET full_name = ?, phone = ? WHERE user_id = ?")
            .bind(full_name)
            .bind(phone)
            .bind(id)
            .execute(self.pool)
            .await?;

        self.get_by_id(id).await?.ok_or(RepositoryError::NotFound)
    }

    /// Get a user's password hash by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_password_hash(&self, id: UserId) -> Result<Option<String>, RepositoryError> {
        let hash =
            sqlx::query_scalar::<_, String>("SELECT password_hash FROM users WHERE user_id = ?")
                .bind(id)
                .fetch_optional(self.pool)
                .await?;

        Ok(hash)
    }

    /// Replace a user's password hash.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn set_password_hash(&self, id: UserId, hash: &str) -> Result<(), RepositoryError> {
        sqlx::query("UPDATE users SET password_hash = ? WHERE user_id = ?")
            .bind(hash)
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(())
    }
}
