//! REST API endpoints for recording and listing stock transactions.

use crate::{ApiApplication, ApiError, ErrorMessage};
use aide::{
    axum::{
        ApiRouter,
        routing::{get_with, post_with},
    },
    transform::TransformOperation,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use inv_core::{
    models::{ProductId, TransactionRecord},
    ports::TransactionRepository as _,
};

/// Path parameter for a product's transaction history.
#[derive(serde::Deserialize, schemars::JsonSchema)]
#[schemars(inline)]
struct Id {
    /// The unique identifier of the product
    product_id: ProductId,
}

/// Request body for recording a transaction.
#[derive(serde::Deserialize, schemars::JsonSchema)]
struct TransactionRequest {
    /// The product whose stock changes
    product_id: ProductId,
    /// Units bought (positive) or sold (negative)
    quantity: i64,
}

/// Creates a router with transaction-related endpoints.
pub fn router<T: ApiApplication>() -> ApiRouter<T> {
    ApiRouter::new()
        .api_route_with(
            "/transactions",
            post_with(create_transaction::<T>, create_transaction_docs),
            |route| route.tag("transactions"),
        )
        .api_route_with(
            "/products/{product_id}/transactions",
            get_with(list_transactions::<T>, list_transactions_docs),
            |route| route.tag("transactions").tag("products"),
        )
}

/// Record a stock movement.
///
/// The product lookup, the quantity check, the stock check and the write all
/// happen as one atomic step in the repository.
async fn create_transaction<T: ApiApplication>(
    State(app): State<T>,
    Json(body): Json<TransactionRequest>,
) -> Result<(StatusCode, Json<TransactionRecord>), ApiError> {
    let as_of = app.now();

    let record = app
        .database()
        .apply_transaction(body.product_id, body.quantity, as_of)
        .await
        .map_err(ApiError::internal("failed to record transaction"))??;

    Ok((StatusCode::CREATED, Json(record)))
}

async fn list_transactions<T: ApiApplication>(
    State(app): State<T>,
    Path(Id { product_id }): Path<Id>,
) -> Result<Json<Vec<TransactionRecord>>, ApiError> {
    app.database()
        .list_transactions(product_id)
        .await
        .map_err(ApiError::internal("failed to list transactions"))?
        .map(Json)
        .ok_or(ApiError::ProductNotFound)
}

fn create_transaction_docs(op: TransformOperation) -> TransformOperation<'_> {
    op.summary("Record transaction")
        .description(
            r#"
            Record a change to the stock of a product. A positive quantity is a
            `BUY`, a negative one a `SELL`.

            The request is refused if the quantity is zero or if selling would
            leave the stock below zero.
            "#,
        )
        .response_with::<400, Json<ErrorMessage>, _>(|res| {
            res.description("Quantity is zero or stock is insufficient")
        })
        .response_with::<404, Json<ErrorMessage>, _>(|res| res.description("Product not found"))
        .response_with::<500, Json<ErrorMessage>, _>(|res| {
            res.description("Database operation failed")
        })
}

fn list_transactions_docs(op: TransformOperation) -> TransformOperation<'_> {
    op.summary("List product transactions")
        .description("Return the transactions recorded against a product, oldest first.")
        .response_with::<404, Json<ErrorMessage>, _>(|res| res.description("Product not found"))
        .response_with::<500, Json<ErrorMessage>, _>(|res| res.description("Database query failed"))
}
