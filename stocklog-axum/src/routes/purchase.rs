use super::json_error;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use stocklog_core::ports::{InventoryRepository, PurchaseFailure};
use tracing::{Level, event};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseDto {
    date: String,
    amount: i64,
    product_id: String,
    product_name: Option<String>,
}

/// Record a purchase movement, creating the product on first contact.
pub async fn register_purchase<T: InventoryRepository>(
    State(state): State<T>,
    Json(PurchaseDto {
        date,
        amount,
        product_id,
        product_name,
    }): Json<PurchaseDto>,
) -> Response {
    let result = state
        .register_purchase(&product_id, product_name.as_deref(), &date, amount)
        .await;

    match result {
        Ok(Ok(())) => Json(json!({ "success": true })).into_response(),
        Ok(Err(PurchaseFailure::InvalidDate)) => {
            json_error(StatusCode::BAD_REQUEST, "Invalid date format")
        }
        Ok(Err(PurchaseFailure::CapExceeded)) => {
            json_error(StatusCode::BAD_REQUEST, "Max limit exceeded")
        }
        Err(error) => {
            event!(Level::ERROR, ?error);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": "Could not register purchase" })),
            )
                .into_response()
        }
    }
}
