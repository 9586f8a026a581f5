//! Wishlist handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use minimart_core::{ProductId, UserId};

use crate::db::WishlistRepository;
use crate::error::Result;
use crate::models::WishlistItem;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Request body for a wishlist toggle.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleRequest {
    pub user_id: UserId,
    pub product_id: ProductId,
}

/// Wishlist membership state, returned by toggle and check.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteState {
    pub is_favorite: bool,
}

/// POST /api/wishlist/toggle - flip wishlist membership for a product.
pub async fn toggle(
    State(state): State<AppState>,
    Json(req): Json<ToggleRequest>,
) -> Result<Json<ApiResponse<FavoriteState>>> {
    let is_favorite = WishlistRepository::new(state.pool())
        .toggle(req.user_id, req.product_id)
        .await?;

    let message = if is_favorite {
        "Added to wishlist"
    } else {
        "Removed from wishlist"
    };

    Ok(Json(ApiResponse::with_message(
        message,
        FavoriteState { is_favorite },
    )))
}

/// GET /api/wishlist/{userId} - list a user's wishlist, newest first.
pub async fn list(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<ApiResponse<Vec<WishlistItem>>>> {
    let items = WishlistRepository::new(state.pool())
        .list_for_user(user_id)
        .await?;

    Ok(Json(ApiResponse::data(items)))
}

/// GET /api/wishlist/check/{userId}/{productId} - membership check.
pub async fn check(
    State(state): State<AppState>,
    Path((user_id, product_id)): Path<(UserId, ProductId)>,
) -> Result<Json<ApiResponse<FavoriteState>>> {
    let is_favorite = WishlistRepository::new(state.pool())
        .contains(user_id, product_id)
        .await?;

    Ok(Json(ApiResponse::data(FavoriteState { is_favorite })))
}
