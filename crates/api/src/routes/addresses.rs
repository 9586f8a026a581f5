//! Shipping address handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use minimart_core::{AddressId, UserId};

use crate::db::{AddressFields, AddressRepository, RepositoryError};
use crate::error::{AppError, Result};
use crate::models::Address;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Request body for creating an address.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAddressRequest {
    pub user_id: UserId,
    pub receiver_name: String,
    pub phone_number: String,
    pub street_address: String,
    pub city: String,
    #[serde(default)]
    pub is_default: bool,
}

/// Request body for updating an address.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAddressRequest {
    pub receiver_name: String,
    pub phone_number: String,
    pub street_address: String,
    pub city: String,
    #[serde(default)]
    pub is_default: bool,
}

/// Payload returned after a successful address creation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressCreated {
    pub address_id: AddressId,
}

/// GET /api/addresses/{id} - list a user's addresses, default first.
pub async fn list(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<ApiResponse<Vec<Address>>>> {
    let addresses = AddressRepository::new(state.pool())
        .list_for_user(user_id)
        .await?;

    Ok(Json(ApiResponse::data(addresses)))
}

/// GET /api/addresses/detail/{id} - single address.
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<AddressId>,
) -> Result<Json<ApiResponse<Address>>> {
    let address = AddressRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Address".to_string()))?;

    Ok(Json(ApiResponse::data(address)))
}

/// POST /api/addresses - create an address.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateAddressRequest>,
) -> Result<Json<ApiResponse<AddressCreated>>> {
    let address_id = AddressRepository::new(state.pool())
        .create(
            req.user_id,
            AddressFields {
                receiver_name: &req.receiver_name,
                phone_number: &req.phone_number,
                street_address: &req.street_address,
                city: &req.city,
                is_default: req.is_default,
            },
        )
        .await?;

    Ok(Json(ApiResponse::with_message(
        "Address added",
        AddressCreated { address_id },
    )))
}

/// PUT /api/addresses/{id} - update an address.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<AddressId>,
    Json(req): Json<UpdateAddressRequest>,
) -> Result<Json<ApiResponse<()>>> {
    AddressRepository::new(state.pool())
        .update(
            id,
            AddressFields {
                receiver_name: &req.receiver_name,
                phone_number: &req.phone_number,
                street_address: &req.street_address,
                city: &req.city,
                is_default: req.is_default,
            },
        )
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => AppError::NotFound("Address".to_string()),
            other => other.into(),
        })?;

    Ok(Json(ApiResponse::message("Address updated")))
}

/// DELETE /api/addresses/{id} - delete an address.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<AddressId>,
) -> Result<Json<ApiResponse<()>>> {
    let deleted = AddressRepository::new(state.pool()).delete(id).await?;
    if !deleted {
        return Err(AppError::NotFound("Address".to_string()));
    }

    Ok(Json(ApiResponse::message("Address deleted")))
}
