use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};
use stocklog_axum::router;
use stocklog_sqlite::{Database, Storage};

/// Each test runs against its own named in-memory database.
fn server(name: &str) -> anyhow::Result<TestServer> {
    let db = Database::with_storage(Storage::Memory(name.to_owned()), None)?;
    Ok(TestServer::new(router(db))?)
}

#[tokio::test]
async fn health_check_reports_ok() -> anyhow::Result<()> {
    let server = server("api_health")?;

    let response = server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "status": "ok" }));

    Ok(())
}

#[tokio::test]
async fn purchase_round_trip() -> anyhow::Result<()> {
    let server = server("api_purchase")?;

    let response = server
        .post("/register-purchase")
        .json(&json!({
            "date": "10/01/2022",
            "amount": 5,
            "productId": "1",
            "productName": "Sugar"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "success": true }));

    Ok(())
}

#[tokio::test]
async fn purchase_with_a_malformed_date_is_a_bad_request() -> anyhow::Result<()> {
    let server = server("api_purchase_bad_date")?;

    let response = server
        .post("/register-purchase")
        .json(&json!({
            "date": "2022-01-10",
            "amount": 5,
            "productId": "1",
            "productName": "Sugar"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Invalid date format" })
    );

    Ok(())
}

#[tokio::test]
async fn purchase_over_the_monthly_cap_is_a_bad_request() -> anyhow::Result<()> {
    let server = server("api_purchase_cap")?;

    for day in ["10/01/2022", "15/01/2022"] {
        let response = server
            .post("/register-purchase")
            .json(&json!({
                "date": day,
                "amount": 5,
                "productId": "1",
                "productName": "Sugar"
            }))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
    }

    let response = server
        .post("/register-purchase")
        .json(&json!({
            "date": "20/01/2022",
            "amount": 25,
            "productId": "1",
            "productName": "Sugar"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Max limit exceeded" })
    );

    Ok(())
}

#[tokio::test]
async fn purchase_of_an_unnamed_unknown_product_is_a_server_error() -> anyhow::Result<()> {
    let server = server("api_purchase_unnamed")?;

    let response = server
        .post("/register-purchase")
        .json(&json!({
            "date": "10/01/2022",
            "amount": 5,
            "productId": "1"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "success": false, "error": "Could not register purchase" })
    );

    Ok(())
}

#[tokio::test]
async fn sale_round_trip() -> anyhow::Result<()> {
    let server = server("api_sale")?;

    let response = server
        .post("/register-purchase")
        .json(&json!({
            "date": "10/01/2022",
            "amount": 10,
            "productId": "1",
            "productName": "Sugar"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = server
        .post("/register-sale")
        .json(&json!({
            "date": "12/01/2022",
            "amount": 4,
            "productId": "1"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "success": true }));

    Ok(())
}

#[tokio::test]
async fn sale_of_an_unknown_product_is_not_found() -> anyhow::Result<()> {
    let server = server("api_sale_unknown")?;

    let response = server
        .post("/register-sale")
        .json(&json!({
            "date": "12/01/2022",
            "amount": 1,
            "productId": "404"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Product 404 not found" })
    );

    Ok(())
}

#[tokio::test]
async fn sale_beyond_stock_is_a_conflict() -> anyhow::Result<()> {
    let server = server("api_sale_conflict")?;

    let response = server
        .post("/register-purchase")
        .json(&json!({
            "date": "10/01/2022",
            "amount": 10,
            "productId": "1",
            "productName": "Sugar"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = server
        .post("/register-sale")
        .json(&json!({
            "date": "12/01/2022",
            "amount": 15,
            "productId": "1"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Not enough stock for product 1" })
    );

    Ok(())
}

#[tokio::test]
async fn sale_with_a_malformed_date_is_a_bad_request() -> anyhow::Result<()> {
    let server = server("api_sale_bad_date")?;

    let response = server
        .post("/register-sale")
        .json(&json!({
            "date": "12-01-2022",
            "amount": 1,
            "productId": "1"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Invalid date format" })
    );

    Ok(())
}
