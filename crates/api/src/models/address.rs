//! Shipping address model.

use serde::Serialize;

use minimart_core::{AddressId, UserId};

/// A user's shipping address.
///
/// Invariant (maintained by `AddressRepository`): at most one address per
/// user has `is_default` set.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub address_id: AddressId,
    pub user_id: UserId,
    pub receiver_name: String,
    pub phone_number: String,
    pub street_address: String,
    pub city: String,
    pub is_default: bool,
}
