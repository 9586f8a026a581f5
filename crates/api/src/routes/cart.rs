//! Cart handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;

use minimart_core::{CartItemId, ProductId, UserId};

use crate::db::CartRepository;
use crate::error::{AppError, Result};
use crate::models::CartLine;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/cart/{userId} - list a user's cart lines.
pub async fn list(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<ApiResponse<Vec<CartLine>>>> {
    let lines = CartRepository::new(state.pool()).list_for_user(user_id).await?;

    Ok(Json(ApiResponse::data(lines)))
}

/// Request body for adding a product to the cart.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub user_id: UserId,
    pub product_id: ProductId,
    pub quantity: i32,
}

/// POST /api/cart/add - add a product, or increment its line if present.
pub async fn add(
    State(state): State<AppState>,
    Json(req): Json<AddToCartRequest>,
) -> Result<Json<ApiResponse<()>>> {
    if req.quantity < 1 {
        return Err(AppError::InvalidRequest(
            "Quantity must be at least 1".to_string(),
        ));
    }

    CartRepository::new(state.pool())
        .add(req.user_id, req.product_id, req.quantity)
        .await?;

    Ok(Json(ApiResponse::message("Added to cart")))
}

/// Request body for setting a cart line's quantity.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartRequest {
    pub cart_item_id: CartItemId,
    pub quantity: i32,
}

/// PUT /api/cart/update - set a cart line's quantity.
pub async fn update(
    State(state): State<AppState>,
    Json(req): Json<UpdateCartRequest>,
) -> Result<Json<ApiResponse<()>>> {
    if req.quantity < 1 {
        return Err(AppError::InvalidRequest(
            "Quantity must be at least 1".to_string(),
        ));
    }

    CartRepository::new(state.pool())
        .update_quantity(req.cart_item_id, req.quantity)
        .await?;

    Ok(Json(ApiResponse::message("Cart updated")))
}

/// DELETE /api/cart/remove/{cartItemId} - remove a cart line.
pub async fn remove(
    State(state): State<AppState>,
    Path(cart_item_id): Path<CartItemId>,
) -> Result<Json<ApiResponse<()>>> {
    CartRepository::new(state.pool()).remove(cart_item_id).await?;

    Ok(Json(ApiResponse::message("Removed from cart")))
}
