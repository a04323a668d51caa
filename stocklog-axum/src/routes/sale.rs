use super::json_error;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use stocklog_core::ports::{InventoryRepository, SaleFailure};
use tracing::{Level, event};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleDto {
    date: String,
    amount: i64,
    product_id: String,
}

/// Record a sale movement against an existing product's stock.
pub async fn register_sale<T: InventoryRepository>(
    State(state): State<T>,
    Json(SaleDto {
        date,
        amount,
        product_id,
    }): Json<SaleDto>,
) -> Response {
    let result = state.register_sale(&product_id, &date, amount).await;

    match result {
        Ok(Ok(())) => Json(json!({ "success": true })).into_response(),
        Ok(Err(SaleFailure::InvalidDate)) => {
            json_error(StatusCode::BAD_REQUEST, "Invalid date format")
        }
        Ok(Err(SaleFailure::ProductNotFound)) => json_error(
            StatusCode::NOT_FOUND,
            format!("Product {product_id} not found"),
        ),
        Ok(Err(SaleFailure::InsufficientStock)) => json_error(
            StatusCode::CONFLICT,
            format!("Not enough stock for product {product_id}"),
        ),
        Err(error) => {
            event!(Level::ERROR, ?error);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": "Could not register sale" })),
            )
                .into_response()
        }
    }
}
