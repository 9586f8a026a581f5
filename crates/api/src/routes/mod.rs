//! HTTP route handlers for the mobile API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                          - Liveness check
//! GET  /health/ready                    - Readiness check (pings the database)
//!
//! # Catalog
//! GET  /api/products                    - Active product list
//! GET  /api/products/{id}               - Product detail + image gallery
//! GET  /api/products/{id}/reviews       - Reviews for a product
//! POST /api/products/{id}/reviews       - Add a review tied to an order
//! GET  /api/categories                  - Active category list
//! GET  /api/promotions                  - Active, unexpired promotions
//! GET  /api/shipping-methods            - Shipping options by ascending cost
//!
//! # Auth
//! POST /api/auth/login                  - Credential check
//! POST /api/auth/register               - Create account
//! POST /api/auth/logout                 - Stateless acknowledgment
//! PUT  /api/auth/update-profile/{id}    - Update name/phone
//! PUT  /api/auth/change-password/{id}   - Verify old password, set new
//!
//! # Addresses
//! GET    /api/addresses/{id}            - List a user's addresses (id = user)
//! GET    /api/addresses/detail/{id}     - Single address
//! POST   /api/addresses                 - Create address
//! PUT    /api/addresses/{id}            - Update address (id = address)
//! DELETE /api/addresses/{id}            - Delete address (id = address)
//!
//! # Cart
//! GET    /api/cart/{userId}             - List cart lines
//! POST   /api/cart/add                  - Add-or-increment
//! PUT    /api/cart/update               - Set line quantity
//! DELETE /api/cart/remove/{cartItemId}  - Remove line
//!
//! # Orders
//! POST /api/orders                      - Place order (transactional)
//! GET  /api/orders/user/{userId}        - Order history summary
//! GET  /api/orders/detail/{orderId}     - Order header + line items
//! PUT  /api/orders/{orderId}/status     - Status transition
//!
//! # Wishlist
//! POST /api/wishlist/toggle             - Toggle membership
//! GET  /api/wishlist/{userId}           - List wishlist
//! GET  /api/wishlist/check/{userId}/{productId} - Membership check
//!
//! # Admin
//! GET  /api/admin/dashboard-stats       - Revenue / pending / completed-today
//! GET  /api/admin/orders                - All orders with receiver/user name
//! ```

pub mod addresses;
pub mod admin;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod orders;
pub mod products;
pub mod wishlist;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::list))
        .route("/{id}", get(products::detail))
        .route(
            "/{id}/reviews",
            get(products::list_reviews).post(products::create_review),
        )
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/register", post(auth::register))
        .route("/logout", post(auth::logout))
        .route("/update-profile/{id}", put(auth::update_profile))
        .route("/change-password/{id}", put(auth::change_password))
}

/// Create the address routes router.
///
/// Mirrors the mobile app's existing contract: the bare `{id}` segment is a
/// user id for GET and an address id for PUT/DELETE.
pub fn address_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(addresses::create))
        .route(
            "/{id}",
            get(addresses::list)
                .put(addresses::update)
                .delete(addresses::remove),
        )
        .route("/detail/{id}", get(addresses::detail))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(cart::list))
        .route("/add", post(cart::add))
        .route("/update", put(cart::update))
        .route("/remove/{id}", delete(cart::remove))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(orders::place))
        .route("/user/{id}", get(orders::list_for_user))
        .route("/detail/{id}", get(orders::detail))
        .route("/{id}/status", put(orders::update_status))
}

/// Create the wishlist routes router.
pub fn wishlist_routes() -> Router<AppState> {
    Router::new()
        .route("/toggle", post(wishlist::toggle))
        .route("/{id}", get(wishlist::list))
        .route("/check/{user_id}/{product_id}", get(wishlist::check))
}

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard-stats", get(admin::dashboard_stats))
        .route("/orders", get(admin::list_orders))
}

/// Create all API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/products", product_routes())
        .route("/api/categories", get(catalog::list_categories))
        .route("/api/promotions", get(catalog::list_promotions))
        .route("/api/shipping-methods", get(catalog::list_shipping_methods))
        .nest("/api/auth", auth_routes())
        .nest("/api/addresses", address_routes())
        .nest("/api/cart", cart_routes())
        .nest("/api/orders", order_routes())
        .nest("/api/wishlist", wishlist_routes())
        .nest("/api/admin", admin_routes())
}
