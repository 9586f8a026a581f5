//! Order repository: checkout, history, detail, admin views.

use rust_decimal::Decimal;
use sqlx::MySqlPool;

use minimart_core::{OrderId, OrderStatus, PaymentStatus, UserId};

use super::{RepositoryError, insert_id};
use crate::models::{AdminOrder, DashboardStats, NewOrder, OrderDetailPayload, OrderInfo, OrderLine, OrderSummary};

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a MySqlPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// Place an order: insert the header, one detail row per line item, and
    /// clear the user's cart, all inside one transaction. Either every step
    /// persists or none do.
    ///
    /// Line totals are computed as quantity x unit price at creation time;
    /// the submitted items are trusted to mirror the cart being cleared.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any statement fails; the
    /// transaction is rolled back and no partial order remains.
    pub async fn place(&self, order: &NewOrder) -> Result<OrderId, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            "INSERT INTO orders \
             (user_id, receiver_name, phone_number, order_date, total_amount, \
              order_status, ship_address, payment_method_id, shipping_method_id, payment_status) \
             VALUES (?, ?, ?, NOW(), ?, ?, ?, ?, ?, ?)",
        )
        .bind(order.user_id)
        .bind(&order.receiver_name)
        .bind(&order.phone_number)
        .bind(order.total_amount)
        .bind(OrderStatus::Pending.as_display())
        .bind(&order.ship_address)
        .bind(order.payment_method_id)
        .bind(order.shipping_method_id)
        .bind(PaymentStatus::Unpaid.as_display())
        .execute(&mut *tx)
        .await?;

        let order_id = OrderId::new(insert_id(result.last_insert_id())?);

        for item in &order.items {
            sqlx::query(
                "INSERT INTO order_details (order_id, product_id, quantity, unit_price, total_price) \
                 VALUES (?, ?, ?, ?, ?)",
            )
            .bind(order_id)
            .bind(item.product_id)
            .bind(item.quantity)
            .bind(item.price)
            .bind(item.line_total())
            .execute(&mut *tx)
            .await?;
        }

        sqlx::query("DELETE FROM cart_items WHERE user_id = ?")
            .bind(order.user_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(order_id)
    }

    /// List a user's orders, newest first, with a summary of the first line
    /// item for the history card.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<OrderSummary>, RepositoryError> {
        let orders = sqlx::query_as::<_, OrderSummary>(
            "SELECT o.order_id, o.order_date, o.total_amount, o.order_status, \
                    (SELECT p.product_name FROM order_details od \
                     JOIN products p ON od.product_id = p.product_id \
                     WHERE od.order_id = o.order_id LIMIT 1) AS product_name, \
                    (SELECT p.thumbnail_url FROM order_details od \
                     JOIN products p ON od.product_id = p.product_id \
                     WHERE od.order_id = o.order_id LIMIT 1) AS thumbnail_url, \
                    (SELECT CAST(SUM(quantity) AS SIGNED) FROM order_details \
                     WHERE order_id = o.order_id) AS total_quantity \
             FROM orders o \
             WHERE o.user_id = ? \
             ORDER BY o.order_id DESC",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(orders)
    }

    /// Get the order header plus its line items.
    ///
    /// Returns `None` if the order doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn detail(&self, id: OrderId) -> Result<Option<OrderDetailPayload>, RepositoryError> {
        let info = sqlx::query_as::<_, OrderInfo>(
            "SELECT o.order_id, o.order_date, o.order_status, o.total_amount, \
                    o.ship_address, o.receiver_name, o.phone_number, \
                    pm.method_name AS payment_method, sm.method_name AS shipping_method \
             FROM orders o \
             LEFT JOIN payment_methods pm ON o.payment_method_id = pm.payment_method_id \
             LEFT JOIN shipping_methods sm ON o.shipping_method_id = sm.shipping_method_id \
             WHERE o.order_id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        let Some(order_info) = info else {
            return Ok(None);
        };

        let order_items = sqlx::query_as::<_, OrderLine>(
            "SELECT od.order_detail_id, od.product_id, od.quantity, od.unit_price, od.total_price, \
                    p.product_name, p.thumbnail_url \
             FROM order_details od \
             JOIN products p ON od.product_id = p.product_id \
             WHERE od.order_id = ?",
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        Ok(Some(OrderDetailPayload {
            order_info,
            order_items,
        }))
    }

    /// List all orders for the admin panel, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<AdminOrder>, RepositoryError> {
        let orders = sqlx::query_as::<_, AdminOrder>(
            "SELECT o.order_id, o.order_date, o.total_amount, o.order_status AS status, \
                    o.receiver_name, u.full_name \
             FROM orders o \
             LEFT JOIN users u ON o.user_id = u.user_id \
             ORDER BY o.order_date DESC",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(orders)
    }

    /// Set an order's status.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the order doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<(), RepositoryError> {
        // An UPDATE that leaves the row unchanged reports zero affected rows
        // on MySQL, so existence is checked separately.
        sqlx::query_scalar::<_, i32>("SELECT 1 FROM orders WHERE order_id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        sqlx::query("UPDATE orders SET order_status = ? WHERE order_id = ?")
            .bind(status.as_display())
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(())
    }

    /// Compute the admin dashboard statistics.
    ///
    /// The three aggregates run concurrently, each on its own pooled
    /// connection, and the call resolves once all three complete.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any query fails.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, RepositoryError> {
        let revenue = sqlx::query_scalar::<_, Option<Decimal>>(
            "SELECT SUM(total_amount) FROM orders \
             WHERE DATE(order_date) = CURDATE() AND order_status != ?",
        )
        .bind(OrderStatus::Cancelled.as_display())
        .fetch_one(self.pool);

        let pending = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM orders WHERE order_status = ?",
        )
        .bind(OrderStatus::Pending.as_display())
        .fetch_one(self.pool);

        let completed_today = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM orders \
             WHERE order_status = ? AND DATE(order_date) = CURDATE()",
        )
        .bind(OrderStatus::Completed.as_display())
        .fetch_one(self.pool);

        let (revenue, pending, completed_today) =
            tokio::try_join!(revenue, pending, completed_today)?;

        Ok(DashboardStats {
            daily_revenue: revenue.unwrap_or_default(),
            pending_orders: pending,
            completed_orders_today: completed_today,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::CartRepository;
    use crate::db::test_support::{
        seed_payment_method, seed_product, seed_shipping_method, seed_user,
    };
    use crate::models::NewOrderLine;

    #[sqlx::test]
    #[ignore = "requires a MySQL server (set DATABASE_URL)"]
    async fn test_place_persists_header_and_details_and_clears_cart(pool: MySqlPool) {
        let user_id = seed_user(&pool, "checkout@example.com").await;
        let sensor = seed_product(&pool, "Soil moisture sensor", Decimal::new(1000, 2)).await;
        let gauge = seed_product(&pool, "Rain gauge", Decimal::new(500, 2)).await;
        let payment_method_id = seed_payment_method(&pool).await;
        let shipping_method_id = seed_shipping_method(&pool).await;

        let cart = CartRepository::new(&pool);
        cart.add(user_id, sensor, 2).await.unwrap();
        cart.add(user_id, gauge, 1).await.unwrap();

        let repo = OrderRepository::new(&pool);
        let order_id = repo
            .place(&NewOrder {
                user_id,
                total_amount: Decimal::new(2500, 2),
                ship_address: "12 Mission St".to_string(),
                receiver_name: "Alice".to_string(),
                phone_number: "0900000001".to_string(),
                payment_method_id,
                shipping_method_id,
                items: vec![
                    NewOrderLine {
                        product_id: sensor,
                        quantity: 2,
                        price: Decimal::new(1000, 2),
                    },
                    NewOrderLine {
                        product_id: gauge,
                        quantity: 1,
                        price: Decimal::new(500, 2),
                    },
                ],
            })
            .await
            .unwrap();

        let detail = repo.detail(order_id).await.unwrap().unwrap();
        assert_eq!(detail.order_info.order_status, OrderStatus::Pending.as_display());
        assert_eq!(detail.order_info.total_amount, Decimal::new(2500, 2));
        assert_eq!(detail.order_items.len(), 2);

        let sensor_line = detail
            .order_items
            .iter()
            .find(|line| line.product_id == sensor)
            .unwrap();
        assert_eq!(sensor_line.total_price, Decimal::new(2000, 2));

        // Checkout clears the cart in the same transaction.
        assert!(cart.list_for_user(user_id).await.unwrap().is_empty());
    }

    #[sqlx::test]
    #[ignore = "requires a MySQL server (set DATABASE_URL)"]
    async fn test_update_status_missing_order_is_not_found(pool: MySqlPool) {
        let err = OrderRepository::new(&pool)
            .update_status(OrderId::new(9999), OrderStatus::Shipping)
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));
    }
}
