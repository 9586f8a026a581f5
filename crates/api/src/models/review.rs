//! Product review model.

use chrono::NaiveDateTime;
use serde::Serialize;

use minimart_core::ReviewId;

/// A review, joined with the reviewer's display name.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub review_id: ReviewId,
    pub rating: i32,
    pub comment: Option<String>,
    pub review_date: NaiveDateTime,
    pub user_name: String,
}
