//! Row and payload types returned by the API.
//!
//! Row structs derive `sqlx::FromRow` and map 1:1 onto query column lists;
//! payload-only structs (envelope bodies assembled from several queries) just
//! derive `Serialize`. All JSON output is camelCase.

pub mod address;
pub mod cart;
pub mod catalog;
pub mod order;
pub mod review;
pub mod user;
pub mod wishlist;

pub use address::Address;
pub use cart::CartLine;
pub use catalog::{
    Category, ProductDetail, ProductSummary, Promotion, ShippingMethod, PLACEHOLDER_THUMBNAIL,
};
pub use order::{
    AdminOrder, DashboardStats, NewOrder, NewOrderLine, OrderDetailPayload, OrderInfo, OrderLine,
    OrderSummary,
};
pub use review::Review;
pub use user::User;
pub use wishlist::WishlistItem;
