use axum::http::StatusCode;
use rstest::*;
use serde_json::{Value, json};

mod app;
use app::Backend;

fn widget() -> Value {
    json!({ "name": "Widget", "price": 10.0, "details": "basic" })
}

#[rstest]
#[case::memory(Backend::Memory)]
#[case::sqlite(Backend::Sqlite)]
#[test_log::test(tokio::test)]
async fn test_widget_lifecycle(#[case] backend: Backend) {
    let server = backend.server().await;

    // create
    let response = server.post("/products").json(&widget()).await;
    response.assert_status(StatusCode::CREATED);
    let product = response.json::<Value>();
    assert_eq!(product["name"], "Widget");
    assert_eq!(product["quantity"], 0);
    let id = product["id"].as_i64().unwrap();

    // buy
    let response = server
        .post("/transactions")
        .json(&json!({ "product_id": id, "quantity": 5 }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let transaction = response.json::<Value>();
    assert_eq!(transaction["product_id"], id);
    assert_eq!(transaction["quantity"], 5);
    assert_eq!(transaction["type"], "BUY");
    assert!(transaction["transaction_date"].is_string());

    let product = server.get(&format!("/products/{id}")).await.json::<Value>();
    assert_eq!(product["quantity"], 5);

    // oversell
    let response = server
        .post("/transactions")
        .json(&json!({ "product_id": id, "quantity": -10 }))
        .await;
    response.assert_status_bad_request();
    response.assert_json(&json!({ "message": "Not enough product quantity" }));

    // zero
    let response = server
        .post("/transactions")
        .json(&json!({ "product_id": id, "quantity": 0 }))
        .await;
    response.assert_status_bad_request();
    response.assert_json(&json!({ "message": "Quantity cannot be zero" }));

    // sell what is there
    let response = server
        .post("/transactions")
        .json(&json!({ "product_id": id, "quantity": -5 }))
        .await;
    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["type"], "SELL");

    let history = server
        .get(&format!("/products/{id}/transactions"))
        .await
        .json::<Vec<Value>>();
    let quantities: Vec<i64> = history
        .iter()
        .map(|t| t["quantity"].as_i64().unwrap())
        .collect();
    assert_eq!(quantities, vec![5, -5]);

    // delete
    let response = server.delete(&format!("/products/{id}")).await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["id"], id);

    server
        .get(&format!("/products/{id}"))
        .await
        .assert_status_not_found();
    server
        .get(&format!("/products/{id}/transactions"))
        .await
        .assert_status_not_found();
}

#[rstest]
#[case::memory(Backend::Memory)]
#[case::sqlite(Backend::Sqlite)]
#[test_log::test(tokio::test)]
async fn test_unknown_product(#[case] backend: Backend) {
    let server = backend.server().await;
    let not_found = json!({ "message": "Product not found" });

    let response = server
        .post("/transactions")
        .json(&json!({ "product_id": 999, "quantity": 1 }))
        .await;
    response.assert_status_not_found();
    response.assert_json(&not_found);

    // a missing product wins over a zero quantity
    let response = server
        .post("/transactions")
        .json(&json!({ "product_id": 999, "quantity": 0 }))
        .await;
    response.assert_status_not_found();
    response.assert_json(&not_found);

    for response in [
        server.get("/products/999").await,
        server.put("/products/999").json(&widget()).await,
        server.delete("/products/999").await,
        server
            .patch("/products/999/details")
            .json(&json!({ "details": "x" }))
            .await,
        server
            .patch("/products/999/price")
            .json(&json!({ "price": 1.0 }))
            .await,
        server
            .patch("/products/999/name")
            .json(&json!({ "name": "x" }))
            .await,
        server
            .patch("/products/999/quantity")
            .json(&json!({ "quantity": 1 }))
            .await,
        server.get("/products/999/transactions").await,
    ] {
        response.assert_status_not_found();
        response.assert_json(&not_found);
    }
}

#[rstest]
#[case::memory(Backend::Memory)]
#[case::sqlite(Backend::Sqlite)]
#[test_log::test(tokio::test)]
async fn test_opening_stock_is_a_transaction(#[case] backend: Backend) {
    let server = backend.server().await;

    let mut body = widget();
    body["quantity"] = json!(7);
    let product = server.post("/products").json(&body).await.json::<Value>();
    assert_eq!(product["quantity"], 7);

    let id = product["id"].as_i64().unwrap();
    let history = server
        .get(&format!("/products/{id}/transactions"))
        .await
        .json::<Vec<Value>>();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["quantity"], 7);
    assert_eq!(history[0]["type"], "BUY");
}

#[rstest]
#[case::memory(Backend::Memory)]
#[case::sqlite(Backend::Sqlite)]
#[test_log::test(tokio::test)]
async fn test_field_updates(#[case] backend: Backend) {
    let server = backend.server().await;
    let product = server.post("/products").json(&widget()).await.json::<Value>();
    let id = product["id"].as_i64().unwrap();

    let response = server
        .patch(&format!("/products/{id}/details"))
        .json(&json!({ "details": "deluxe" }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["details"], "deluxe");

    let response = server
        .patch(&format!("/products/{id}/price"))
        .json(&json!({ "price": 12.5 }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["price"], 12.5);

    let response = server
        .patch(&format!("/products/{id}/name"))
        .json(&json!({ "name": "Gadget" }))
        .await;
    response.assert_status_ok();
    let product = response.json::<Value>();
    assert_eq!(product["name"], "Gadget");
    assert_eq!(product["price"], 12.5);
    assert_eq!(product["details"], "deluxe");
    assert_eq!(product["quantity"], 0);

    // none of this touches the history
    let history = server
        .get(&format!("/products/{id}/transactions"))
        .await
        .json::<Vec<Value>>();
    assert!(history.is_empty());
}

#[rstest]
#[case::memory(Backend::Memory)]
#[case::sqlite(Backend::Sqlite)]
#[test_log::test(tokio::test)]
async fn test_quantity_adjustments(#[case] backend: Backend) {
    let server = backend.server().await;
    let product = server.post("/products").json(&widget()).await.json::<Value>();
    let id = product["id"].as_i64().unwrap();

    let response = server
        .patch(&format!("/products/{id}/quantity"))
        .json(&json!({ "quantity": 8 }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["quantity"], 8);

    // replacing the product may also set the stock
    let response = server
        .put(&format!("/products/{id}"))
        .json(&json!({ "name": "Gadget", "price": 3.0, "details": "", "quantity": 3 }))
        .await;
    response.assert_status_ok();
    let product = response.json::<Value>();
    assert_eq!(product["name"], "Gadget");
    assert_eq!(product["quantity"], 3);

    // an unchanged level records nothing
    server
        .patch(&format!("/products/{id}/quantity"))
        .json(&json!({ "quantity": 3 }))
        .await
        .assert_status_ok();

    // leaving quantity out of a replacement keeps the stock
    let response = server
        .put(&format!("/products/{id}"))
        .json(&widget())
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["quantity"], 3);

    let history = server
        .get(&format!("/products/{id}/transactions"))
        .await
        .json::<Vec<Value>>();
    let recorded: Vec<(i64, &str)> = history
        .iter()
        .map(|t| (t["quantity"].as_i64().unwrap(), t["type"].as_str().unwrap()))
        .collect();
    assert_eq!(recorded, vec![(8, "BUY"), (-5, "SELL")]);
}

#[rstest]
#[case::memory(Backend::Memory)]
#[case::sqlite(Backend::Sqlite)]
#[test_log::test(tokio::test)]
async fn test_invalid_bodies_are_rejected(#[case] backend: Backend) {
    let server = backend.server().await;

    for body in [
        json!({ "name": "", "price": 1.0, "details": "" }),
        json!({ "name": "Widget", "price": -1.0, "details": "" }),
        json!({ "name": "Widget", "details": "" }),
        json!({ "name": "Widget", "price": 1.0, "details": "", "quantity": -1 }),
    ] {
        let response = server.post("/products").json(&body).await;
        assert!(
            response.status_code().is_client_error(),
            "accepted {body}: {}",
            response.status_code()
        );
    }

    let products = server.get("/products").await.json::<Vec<Value>>();
    assert!(products.is_empty());
}

#[rstest]
#[case::memory(Backend::Memory)]
#[case::sqlite(Backend::Sqlite)]
#[test_log::test(tokio::test)]
async fn test_products_are_listed_in_creation_order(#[case] backend: Backend) {
    let server = backend.server().await;

    for name in ["a", "b", "c"] {
        server
            .post("/products")
            .json(&json!({ "name": name, "price": 1.0, "details": "" }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let products = server.get("/products").await.json::<Vec<Value>>();
    let names: Vec<&str> = products
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test_log::test(tokio::test)]
async fn test_health_and_docs() {
    let server = Backend::Memory.server().await;

    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_json(&json!({ "status": "ok" }));

    let api = server.get("/docs/api.json").await.json::<Value>();
    assert_eq!(api["info"]["title"], "Inventory API");
    assert!(api["paths"]["/transactions"]["post"].is_object());
    assert!(api["paths"]["/products/{product_id}/quantity"]["patch"].is_object());

    server.get("/docs").await.assert_status_ok();
}
