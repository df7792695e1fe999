use axum::{
    routing::{delete, get, post},
    Router,
};

pub mod products;
pub mod system;

/// Router for the catalog endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/products", get(products::showcase))
        .route("/all", get(products::list_all))
        .route("/add", post(products::add_product))
        .route("/delete/:id", delete(products::remove_product))
}
