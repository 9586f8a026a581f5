//! Product catalog and review handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;

use minimart_core::{OrderId, ProductId, UserId};

use crate::db::{CatalogRepository, ReviewRepository};
use crate::error::{AppError, Result};
use crate::models::{ProductDetail, ProductSummary, Review};
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/products - list active products.
pub async fn list(State(state): State<AppState>) -> Result<Json<ApiResponse<Vec<ProductSummary>>>> {
    let products = CatalogRepository::new(state.pool()).list_products().await?;

    Ok(Json(ApiResponse::data(products)))
}

/// GET /api/products/{id} - product detail with spec columns and gallery.
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<ApiResponse<ProductDetail>>> {
    let product = CatalogRepository::new(state.pool())
        .product_detail(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product".to_string()))?;

    Ok(Json(ApiResponse::data(product)))
}

/// GET /api/products/{id}/reviews - reviews for a product, newest first.
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<ApiResponse<Vec<Review>>>> {
    let reviews = ReviewRepository::new(state.pool())
        .list_for_product(id)
        .await?;

    Ok(Json(ApiResponse::data(reviews)))
}

/// Request body for adding a review.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub user_id: UserId,
    pub order_id: OrderId,
    pub rating: i32,
    pub comment: Option<String>,
}

/// POST /api/products/{id}/reviews - add a review tied to an order.
pub async fn create_review(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Json(req): Json<CreateReviewRequest>,
) -> Result<Json<ApiResponse<()>>> {
    if !(1..=5).contains(&req.rating) {
        return Err(AppError::InvalidRequest(
            "Rating must be between 1 and 5".to_string(),
        ));
    }

    ReviewRepository::new(state.pool())
        .create(
            id,
            req.user_id,
            req.order_id,
            req.rating,
            req.comment.as_deref(),
        )
        .await?;

    Ok(Json(ApiResponse::message("Review submitted")))
}
