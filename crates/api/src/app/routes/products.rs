use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// The fixed showcase list; never touches the store.
pub async fn showcase() -> impl IntoResponse {
    let items: Vec<dto::ProductResponse> = catalog_products::showcase::products()
        .into_iter()
        .map(dto::ProductResponse::from)
        .collect();
    Json(items)
}

pub async fn list_all(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    match services.catalog().list_all().await {
        Ok(products) => {
            let items: Vec<dto::ProductResponse> =
                products.iter().map(dto::ProductResponse::from).collect();
            (StatusCode::OK, Json(items)).into_response()
        }
        Err(e) => errors::catalog_error_to_response(e),
    }
}

pub async fn add_product(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::AddProductRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_body", e.body_text()),
    };

    match services.catalog().add_product(body.into()).await {
        Ok(product) => (StatusCode::CREATED, Json(dto::ProductResponse::from(&product))).into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

pub async fn remove_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.catalog().remove_product(&id).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}
