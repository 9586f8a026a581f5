//! Admin dashboard handlers.

use axum::{Json, extract::State};

use crate::db::OrderRepository;
use crate::error::Result;
use crate::models::{AdminOrder, DashboardStats};
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/admin/dashboard-stats - today's revenue, pending and completed
/// order counts.
pub async fn dashboard_stats(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<DashboardStats>>> {
    let stats = OrderRepository::new(state.pool()).dashboard_stats().await?;

    Ok(Json(ApiResponse::data(stats)))
}

/// GET /api/admin/orders - all orders with receiver and account names.
pub async fn list_orders(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<AdminOrder>>>> {
    let orders = OrderRepository::new(state.pool()).list_all().await?;

    Ok(Json(ApiResponse::data(orders)))
}
