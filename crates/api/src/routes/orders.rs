//! Order handlers: checkout, history, detail, status transitions.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use minimart_core::{OrderId, OrderStatus, UserId};

use crate::db::{OrderRepository, RepositoryError};
use crate::error::{AppError, Result};
use crate::models::{NewOrder, OrderDetailPayload, OrderSummary};
use crate::response::ApiResponse;
use crate::state::AppState;

/// Payload returned after a successful checkout.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPlaced {
    pub order_id: OrderId,
}

/// POST /api/orders - place an order.
///
/// Rejects an empty line-item list up front; the repository then persists
/// the header, details, and cart clear in one transaction.
pub async fn place(
    State(state): State<AppState>,
    Json(order): Json<NewOrder>,
) -> Result<Json<ApiResponse<OrderPlaced>>> {
    if !order.has_items() {
        return Err(AppError::InvalidRequest("Cart is empty".to_string()));
    }

    let order_id = OrderRepository::new(state.pool()).place(&order).await?;

    tracing::info!(%order_id, user_id = %order.user_id, "Order placed");

    Ok(Json(ApiResponse::with_message(
        "Order placed",
        OrderPlaced { order_id },
    )))
}

/// GET /api/orders/user/{userId} - order history, newest first.
pub async fn list_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<ApiResponse<Vec<OrderSummary>>>> {
    let orders = OrderRepository::new(state.pool())
        .list_for_user(user_id)
        .await?;

    Ok(Json(ApiResponse::data(orders)))
}

/// GET /api/orders/detail/{orderId} - order header plus line items.
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
) -> Result<Json<ApiResponse<OrderDetailPayload>>> {
    let payload = OrderRepository::new(state.pool())
        .detail(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Order".to_string()))?;

    Ok(Json(ApiResponse::data(payload)))
}

/// Request body for a status transition.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    pub status: String,
    pub cancel_reason: Option<String>,
}

/// PUT /api/orders/{orderId}/status - transition an order's status.
///
/// The status must be a known token; unknown values are rejected rather
/// than written through to the database.
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<ApiResponse<()>>> {
    let status = OrderStatus::parse(&req.status)
        .map_err(|e| AppError::InvalidRequest(e.to_string()))?;

    if status == OrderStatus::Cancelled
        && let Some(reason) = req.cancel_reason.as_deref()
    {
        tracing::info!(order_id = %id, reason, "Order cancelled");
    }

    OrderRepository::new(state.pool())
        .update_status(id, status)
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => AppError::NotFound("Order".to_string()),
            other => other.into(),
        })?;

    Ok(Json(ApiResponse::message(format!(
        "Order status set to {}",
        status.as_display()
    ))))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::test_support::seed_user;
    use minimart_core::{PaymentMethodId, ShippingMethodId};
    use rust_decimal::Decimal;
    use sqlx::MySqlPool;

    #[sqlx::test]
    #[ignore = "requires a MySQL server (set DATABASE_URL)"]
    async fn test_empty_checkout_rejected_without_writes(pool: MySqlPool) {
        let user_id = seed_user(&pool, "empty-cart@example.com").await;
        let state = AppState::new(pool.clone());

        let order = NewOrder {
            user_id,
            total_amount: Decimal::ZERO,
            ship_address: "12 Mission St".to_string(),
            receiver_name: "Alice".to_string(),
            phone_number: "0900000001".to_string(),
            payment_method_id: PaymentMethodId::new(1),
            shipping_method_id: ShippingMethodId::new(1),
            items: vec![],
        };

        let err = place(State(state), Json(order)).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidRequest(_)));

        let orders: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(orders, 0);
    }
}
