//! Authentication handlers: login, registration, profile, password change.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use minimart_core::UserId;

use crate::db::{RepositoryError, UserRepository};
use crate::error::{AppError, Result};
use crate::models::User;
use crate::response::ApiResponse;
use crate::services::AuthService;
use crate::state::AppState;

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /api/auth/login - verify credentials and return the user record.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<User>>> {
    let user = AuthService::new(state.pool())
        .login(&req.email, &req.password)
        .await?;

    tracing::info!(user_id = %user.user_id, "User logged in");

    Ok(Json(ApiResponse::with_message("Login successful", user)))
}

/// Request body for registration.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
}

/// Payload returned after a successful registration.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registered {
    pub user_id: UserId,
}

/// POST /api/auth/register - create a customer account.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<Registered>>> {
    let user_id = AuthService::new(state.pool())
        .register(
            &req.full_name,
            &req.email,
            req.phone.as_deref(),
            &req.password,
        )
        .await?;

    tracing::info!(%user_id, "User registered");

    Ok(Json(ApiResponse::with_message(
        "Registration successful",
        Registered { user_id },
    )))
}

/// POST /api/auth/logout - stateless acknowledgment.
///
/// No server-side session exists; the client discards its stored user.
pub async fn logout() -> Json<ApiResponse<()>> {
    Json(ApiResponse::message("Logged out"))
}

/// Request body for a profile update.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub full_name: String,
    pub phone: Option<String>,
}

/// PUT /api/auth/update-profile/{id} - update name and phone.
pub async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<User>>> {
    let user = UserRepository::new(state.pool())
        .update_profile(id, &req.full_name, req.phone.as_deref())
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => AppError::NotFound("User".to_string()),
            other => other.into(),
        })?;

    Ok(Json(ApiResponse::with_message("Profile updated", user)))
}

/// Request body for a password change.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

/// PUT /api/auth/change-password/{id} - verify the old password, set the new.
pub async fn change_password(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<Json<ApiResponse<()>>> {
    AuthService::new(state.pool())
        .change_password(id, &req.old_password, &req.new_password)
        .await?;

    tracing::info!(user_id = %id, "Password changed");

    Ok(Json(ApiResponse::message("Password changed")))
}
