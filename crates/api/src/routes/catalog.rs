//! Category, promotion, and shipping-method handlers.

use axum::{Json, extract::State};

use crate::db::CatalogRepository;
use crate::error::Result;
use crate::models::{Category, Promotion, ShippingMethod};
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/categories - list active categories.
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Category>>>> {
    let categories = CatalogRepository::new(state.pool()).list_categories().await?;

    Ok(Json(ApiResponse::data(categories)))
}

/// GET /api/promotions - list active, unexpired promotions.
pub async fn list_promotions(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Promotion>>>> {
    let promotions = CatalogRepository::new(state.pool()).list_promotions().await?;

    Ok(Json(ApiResponse::data(promotions)))
}

/// GET /api/shipping-methods - list shipping methods, cheapest first.
pub async fn list_shipping_methods(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ShippingMethod>>>> {
    let methods = CatalogRepository::new(state.pool())
        .list_shipping_methods()
        .await?;

    Ok(Json(ApiResponse::data(methods)))
}
