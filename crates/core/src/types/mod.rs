//! Shared type definitions.

pub mod email;
pub mod id;
pub mod status;

pub use email::{Email, EmailError};
pub use id::{
    AddressId, CartItemId, CategoryId, OrderId, PaymentMethodId, ProductId, ReviewId,
    ShippingMethodId, UserId, WishlistId,
};
pub use status::{OrderStatus, PaymentStatus, StatusParseError};
