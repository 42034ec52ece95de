use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub async fn add_product(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> axum::response::Response {
    let payload = match body {
        Ok(Json(v)) => v,
        Err(rejection) => {
            tracing::warn!(reason = %rejection.body_text(), "unreadable product payload");
            return errors::invalid_payload();
        }
    };

    let product = match services.add_product(&payload, Utc::now()) {
        Ok(p) => p,
        Err(e) => return errors::domain_error_to_response(e),
    };

    tracing::info!(
        name = %product.name,
        weight = %product.weight,
        price = %product.price,
        image = %product.image,
        "received product"
    );

    (StatusCode::OK, Json(dto::ProductAddedResponse::new(product))).into_response()
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(services.list_products())).into_response()
}
