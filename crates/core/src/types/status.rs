//! Order lifecycle status enums.
//!
//! The mobile app (and admin panel) sends abbreviated English tokens such as
//! `"shipping"`, while the database stores the Vietnamese display strings the
//! rest of the product suite was built around. [`OrderStatus`] owns both
//! representations so that nothing else in the codebase hardcodes either.

use serde::{Deserialize, Serialize};

/// Error returned when a status string is not recognized.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown order status: {0}")]
pub struct StatusParseError(pub String);

/// Order fulfillment status.
///
/// Transitions are caller-directed: any status may be set to any other
/// status by an administrative action. No state machine is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// New order, not yet handled ("Chờ xử lý").
    #[default]
    Pending,
    /// Waiting for carrier pickup ("Chờ lấy hàng").
    AwaitingPickup,
    /// Out for delivery ("Đang giao hàng").
    Shipping,
    /// Delivered ("Hoàn thành").
    Completed,
    /// Cancelled ("Đã hủy").
    Cancelled,
}

impl OrderStatus {
    /// The display string stored in the database.
    #[must_use]
    pub const fn as_display(self) -> &'static str {
        match self {
            Self::Pending => "Chờ xử lý",
            Self::AwaitingPickup => "Chờ lấy hàng",
            Self::Shipping => "Đang giao hàng",
            Self::Completed => "Hoàn thành",
            Self::Cancelled => "Đã hủy",
        }
    }

    /// The abbreviated API token.
    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::AwaitingPickup => "awaiting_pickup",
            Self::Shipping => "shipping",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parse a status from either the API token or the stored display string.
    ///
    /// # Errors
    ///
    /// Returns [`StatusParseError`] for anything outside the known set.
    /// Unknown statuses are rejected rather than written through verbatim.
    pub fn parse(s: &str) -> Result<Self, StatusParseError> {
        match s {
            "pending" | "Chờ xử lý" => Ok(Self::Pending),
            "awaiting_pickup" | "Chờ lấy hàng" => Ok(Self::AwaitingPickup),
            "shipping" | "Đang giao hàng" => Ok(Self::Shipping),
            "completed" | "Hoàn thành" => Ok(Self::Completed),
            "cancelled" | "Đã hủy" => Ok(Self::Cancelled),
            other => Err(StatusParseError(other.to_owned())),
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_display())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Order payment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Not yet paid ("Chưa thanh toán").
    #[default]
    Unpaid,
    /// Paid ("Đã thanh toán").
    Paid,
}

impl PaymentStatus {
    /// The display string stored in the database.
    #[must_use]
    pub const fn as_display(self) -> &'static str {
        match self {
            Self::Unpaid => "Chưa thanh toán",
            Self::Paid => "Đã thanh toán",
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_display())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tokens() {
        assert_eq!(OrderStatus::parse("pending").unwrap(), OrderStatus::Pending);
        assert_eq!(
            OrderStatus::parse("awaiting_pickup").unwrap(),
            OrderStatus::AwaitingPickup
        );
        assert_eq!(
            OrderStatus::parse("shipping").unwrap(),
            OrderStatus::Shipping
        );
        assert_eq!(
            OrderStatus::parse("completed").unwrap(),
            OrderStatus::Completed
        );
        assert_eq!(
            OrderStatus::parse("cancelled").unwrap(),
            OrderStatus::Cancelled
        );
    }

    #[test]
    fn test_parse_display_strings() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::AwaitingPickup,
            OrderStatus::Shipping,
            OrderStatus::Completed,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(OrderStatus::parse(status.as_display()).unwrap(), status);
        }
    }

    #[test]
    fn test_parse_unknown_rejected() {
        let err = OrderStatus::parse("refunded").unwrap_err();
        assert_eq!(err.0, "refunded");
    }

    #[test]
    fn test_display_is_stored_form() {
        assert_eq!(OrderStatus::Pending.to_string(), "Chờ xử lý");
        assert_eq!(OrderStatus::Cancelled.to_string(), "Đã hủy");
        assert_eq!(PaymentStatus::Unpaid.to_string(), "Chưa thanh toán");
    }

    #[test]
    fn test_token_roundtrip() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::AwaitingPickup,
            OrderStatus::Shipping,
            OrderStatus::Completed,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(OrderStatus::parse(status.as_token()).unwrap(), status);
        }
    }
}
