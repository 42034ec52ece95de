use axum::{
    routing::{get, post},
    Router,
};

pub mod checkout;
pub mod products;
pub mod system;

/// Router for the `/api` endpoints. Each path also answers with a trailing slash.
pub fn router() -> Router {
    let products = get(products::list_products).post(products::add_product);
    let checkout = post(checkout::checkout);

    Router::new()
        .route("/products", products.clone())
        .route("/products/", products)
        .route("/checkout", checkout.clone())
        .route("/checkout/", checkout)
}
