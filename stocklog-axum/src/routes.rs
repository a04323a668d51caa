mod purchase;
mod sale;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde_json::json;
use stocklog_core::ports::InventoryRepository;

pub(crate) fn router<T: InventoryRepository>() -> Router<T> {
    Router::new()
        .route("/register-purchase", post(purchase::register_purchase::<T>))
        .route("/register-sale", post(sale::register_sale::<T>))
}

// Every refusal shares one body shape on the wire.
pub(crate) fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    let message = message.into();
    (status, Json(json!({ "error": message }))).into_response()
}
