use super::Id;
use crate::{ApiApplication, ApiError};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use inv_core::{
    models::{ProductData, ProductRecord},
    ports::{ProductRepository as _, TransactionRepository as _},
};

/// Request body for creating or replacing a product.
#[derive(serde::Deserialize, schemars::JsonSchema)]
pub(crate) struct ProductRequest {
    #[serde(flatten)]
    data: ProductData,
    /// Stock level to bring the product to, recorded as a transaction
    #[serde(default)]
    quantity: Option<u32>,
}

pub(crate) async fn list_products<T: ApiApplication>(
    State(app): State<T>,
) -> Result<Json<Vec<ProductRecord>>, ApiError> {
    app.database()
        .list_products()
        .await
        .map(Json)
        .map_err(ApiError::internal("failed to list products"))
}

pub(crate) async fn create_product<T: ApiApplication>(
    State(app): State<T>,
    Json(body): Json<ProductRequest>,
) -> Result<(StatusCode, Json<ProductRecord>), ApiError> {
    let as_of = app.now();
    let db = app.database();

    db.create_product(body.data, body.quantity.unwrap_or(0), as_of)
        .await
        .map(|product| (StatusCode::CREATED, Json(product)))
        .map_err(ApiError::internal("failed to create product"))
}

/// Retrieve a product, including its current stock.
pub(crate) async fn read_product<T: ApiApplication>(
    State(app): State<T>,
    Path(Id { product_id }): Path<Id>,
) -> Result<Json<ProductRecord>, ApiError> {
    app.database()
        .get_product(product_id)
        .await
        .map_err(ApiError::internal("failed to get product"))?
        .map(Json)
        .ok_or(ApiError::ProductNotFound)
}

/// Replace a product's fields, then optionally adjust its stock.
///
/// The field update and the stock adjustment are separate atomic steps. A
/// concurrent transaction may land between them, but the adjustment always
/// computes its delta against the quantity it observes.
pub(crate) async fn replace_product<T: ApiApplication>(
    State(app): State<T>,
    Path(Id { product_id }): Path<Id>,
    Json(body): Json<ProductRequest>,
) -> Result<Json<ProductRecord>, ApiError> {
    let as_of = app.now();
    let db = app.database();

    let product = db
        .update_product(product_id, body.data.into())
        .await
        .map_err(ApiError::internal("failed to update product"))?
        .ok_or(ApiError::ProductNotFound)?;

    let Some(quantity) = body.quantity else {
        return Ok(Json(product));
    };

    db.set_quantity(product_id, quantity, as_of)
        .await
        .map_err(ApiError::internal("failed to adjust product quantity"))?
        .map(Json)
        .ok_or(ApiError::ProductNotFound)
}

pub(crate) async fn delete_product<T: ApiApplication>(
    State(app): State<T>,
    Path(Id { product_id }): Path<Id>,
) -> Result<Json<ProductRecord>, ApiError> {
    app.database()
        .delete_product(product_id)
        .await
        .map_err(ApiError::internal("failed to delete product"))?
        .map(Json)
        .ok_or(ApiError::ProductNotFound)
}
