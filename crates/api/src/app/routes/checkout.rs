use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use crate::app::dto::{StatusResponse, MSG_CHECKOUT_COMPLETE};
use crate::app::services::AppServices;

/// Empty the basket. Always succeeds, including on an empty basket.
pub async fn checkout(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    let cleared = services.checkout();
    tracing::info!(cleared, "checkout complete");

    (StatusCode::OK, Json(StatusResponse::success(MSG_CHECKOUT_COMPLETE))).into_response()
}
