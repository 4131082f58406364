use super::Id;
use crate::{ApiApplication, ApiError};

use axum::{
    Json,
    extract::{Path, State},
};
use inv_core::{
    models::{Price, ProductName, ProductRecord, ProductUpdate},
    ports::{ProductRepository as _, TransactionRepository as _},
};

#[derive(serde::Deserialize, schemars::JsonSchema)]
pub(crate) struct DetailsRequest {
    details: String,
}

#[derive(serde::Deserialize, schemars::JsonSchema)]
pub(crate) struct PriceRequest {
    price: Price,
}

#[derive(serde::Deserialize, schemars::JsonSchema)]
pub(crate) struct NameRequest {
    name: ProductName,
}

#[derive(serde::Deserialize, schemars::JsonSchema)]
pub(crate) struct QuantityRequest {
    /// The stock level to reach
    quantity: u32,
}

async fn apply_update<T: ApiApplication>(
    app: &T,
    product_id: inv_core::models::ProductId,
    update: ProductUpdate,
) -> Result<Json<ProductRecord>, ApiError> {
    app.database()
        .update_product(product_id, update)
        .await
        .map_err(ApiError::internal("failed to update product"))?
        .map(Json)
        .ok_or(ApiError::ProductNotFound)
}

pub(crate) async fn update_details<T: ApiApplication>(
    State(app): State<T>,
    Path(Id { product_id }): Path<Id>,
    Json(body): Json<DetailsRequest>,
) -> Result<Json<ProductRecord>, ApiError> {
    let update = ProductUpdate {
        details: Some(body.details),
        ..Default::default()
    };
    apply_update(&app, product_id, update).await
}

pub(crate) async fn update_price<T: ApiApplication>(
    State(app): State<T>,
    Path(Id { product_id }): Path<Id>,
    Json(body): Json<PriceRequest>,
) -> Result<Json<ProductRecord>, ApiError> {
    let update = ProductUpdate {
        price: Some(body.price),
        ..Default::default()
    };
    apply_update(&app, product_id, update).await
}

pub(crate) async fn update_name<T: ApiApplication>(
    State(app): State<T>,
    Path(Id { product_id }): Path<Id>,
    Json(body): Json<NameRequest>,
) -> Result<Json<ProductRecord>, ApiError> {
    let update = ProductUpdate {
        name: Some(body.name),
        ..Default::default()
    };
    apply_update(&app, product_id, update).await
}

pub(crate) async fn update_quantity<T: ApiApplication>(
    State(app): State<T>,
    Path(Id { product_id }): Path<Id>,
    Json(body): Json<QuantityRequest>,
) -> Result<Json<ProductRecord>, ApiError> {
    let as_of = app.now();

    app.database()
        .set_quantity(product_id, body.quantity, as_of)
        .await
        .map_err(ApiError::internal("failed to adjust product quantity"))?
        .map(Json)
        .ok_or(ApiError::ProductNotFound)
}
