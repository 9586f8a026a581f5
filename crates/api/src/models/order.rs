//! Order models: checkout input, history rows, detail payloads, admin views.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use minimart_core::{OrderId, PaymentMethodId, ProductId, ShippingMethodId, UserId};

/// Checkout request: the order header plus its line items.
///
/// The line items are trusted to mirror the submitted cart; prices are
/// snapshotted as sent, with no server-side re-pricing or stock check.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub user_id: UserId,
    pub total_amount: Decimal,
    pub ship_address: String,
    pub receiver_name: String,
    pub phone_number: String,
    pub payment_method_id: PaymentMethodId,
    pub shipping_method_id: ShippingMethodId,
    #[serde(default)]
    pub items: Vec<NewOrderLine>,
}

impl NewOrder {
    /// Checkout precondition: the line-item list must be non-empty.
    #[must_use]
    pub fn has_items(&self) -> bool {
        !self.items.is_empty()
    }
}

/// One line item in a checkout request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderLine {
    pub product_id: ProductId,
    pub quantity: i32,
    pub price: Decimal,
}

impl NewOrderLine {
    /// Line total, snapshotted at creation time.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        Decimal::from(self.quantity) * self.price
    }
}

/// One row of a user's order history.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub order_id: OrderId,
    pub order_date: NaiveDateTime,
    pub total_amount: Decimal,
    pub order_status: String,
    /// Name of the first line item's product, for the history card.
    pub product_name: Option<String>,
    pub thumbnail_url: Option<String>,
    pub total_quantity: Option<i64>,
}

/// The order header, joined with method names.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct OrderInfo {
    pub order_id: OrderId,
    pub order_date: NaiveDateTime,
    pub order_status: String,
    pub total_amount: Decimal,
    pub ship_address: String,
    pub receiver_name: String,
    pub phone_number: String,
    pub payment_method: Option<String>,
    pub shipping_method: Option<String>,
}

/// One persisted line item, joined with its product.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub order_detail_id: i32,
    pub product_id: ProductId,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub total_price: Decimal,
    pub product_name: String,
    pub thumbnail_url: Option<String>,
}

/// Order detail response: header plus line items.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetailPayload {
    pub order_info: OrderInfo,
    pub order_items: Vec<OrderLine>,
}

/// One row of the admin order listing.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AdminOrder {
    pub order_id: OrderId,
    pub order_date: NaiveDateTime,
    pub total_amount: Decimal,
    pub status: String,
    pub receiver_name: String,
    pub full_name: Option<String>,
}

/// Admin dashboard statistics.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub daily_revenue: Decimal,
    pub pending_orders: i64,
    pub completed_orders_today: i64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn new_order(items: Vec<NewOrderLine>) -> NewOrder {
        NewOrder {
            user_id: UserId::new(1),
            total_amount: Decimal::new(2000, 2),
            ship_address: "12 Mission St".to_string(),
            receiver_name: "Alice".to_string(),
            phone_number: "0900000001".to_string(),
            payment_method_id: PaymentMethodId::new(1),
            shipping_method_id: ShippingMethodId::new(1),
            items,
        }
    }

    #[test]
    fn test_line_total() {
        let line = NewOrderLine {
            product_id: ProductId::new(1),
            quantity: 2,
            price: Decimal::new(1000, 2), // 10.00
        };
        assert_eq!(line.line_total(), Decimal::new(2000, 2)); // 20.00
    }

    #[test]
    fn test_empty_items_fails_precondition() {
        assert!(!new_order(vec![]).has_items());
    }

    #[test]
    fn test_missing_items_field_deserializes_empty() {
        let order: NewOrder = serde_json::from_value(serde_json::json!({
            "userId": 1,
            "totalAmount": "20.0",
            "shipAddress": "12 Mission St",
            "receiverName": "Alice",
            "phoneNumber": "0900000001",
            "paymentMethodId": 1,
            "shippingMethodId": 1
        }))
        .unwrap();
        assert!(!order.has_items());
    }

    #[test]
    fn test_checkout_request_deserializes() {
        let order: NewOrder = serde_json::from_value(serde_json::json!({
            "userId": 7,
            "totalAmount": "20.0",
            "shipAddress": "12 Mission St",
            "receiverName": "Alice",
            "phoneNumber": "0900000001",
            "paymentMethodId": 1,
            "shippingMethodId": 2,
            "items": [{"productId": 1, "quantity": 2, "price": "10.0"}]
        }))
        .unwrap();
        assert!(order.has_items());
        assert_eq!(order.items[0].line_total(), Decimal::new(200, 1));
    }
}
