//! REST API endpoints for product operations.
//!
//! Products can be created, listed, read, replaced field by field or as a
//! whole, and deleted. Stock levels are never written directly: a requested
//! quantity is turned into a transaction for the difference.

use crate::{ApiApplication, ErrorMessage};
use aide::{
    axum::{
        ApiRouter,
        routing::{get_with, patch_with},
    },
    transform::TransformOperation,
};
use axum::Json;
use inv_core::models::ProductId;

mod crud;
use crud::*;

mod fields;
use fields::*;

/// Path parameter for product-specific endpoints.
#[derive(serde::Deserialize, schemars::JsonSchema)]
#[schemars(inline)]
struct Id {
    /// The unique identifier of the product
    product_id: ProductId,
}

/// Creates a router with product-related endpoints.
pub fn router<T: ApiApplication>() -> ApiRouter<T> {
    ApiRouter::new()
        .api_route_with(
            "/products",
            get_with(list_products::<T>, list_products_docs)
                .post_with(create_product::<T>, create_product_docs),
            |route| route.tag("products"),
        )
        .api_route_with(
            "/products/{product_id}",
            get_with(read_product::<T>, read_product_docs)
                .put_with(replace_product::<T>, replace_product_docs)
                .delete_with(delete_product::<T>, delete_product_docs),
            |route| route.tag("products"),
        )
        .api_route_with(
            "/products/{product_id}/details",
            patch_with(update_details::<T>, |op| {
                field_docs(op, "Update product details")
            }),
            |route| route.tag("products"),
        )
        .api_route_with(
            "/products/{product_id}/price",
            patch_with(update_price::<T>, |op| field_docs(op, "Update product price")),
            |route| route.tag("products"),
        )
        .api_route_with(
            "/products/{product_id}/name",
            patch_with(update_name::<T>, |op| field_docs(op, "Update product name")),
            |route| route.tag("products"),
        )
        .api_route_with(
            "/products/{product_id}/quantity",
            patch_with(update_quantity::<T>, update_quantity_docs),
            |route| route.tag("products").tag("transactions"),
        )
}

fn list_products_docs(op: TransformOperation) -> TransformOperation<'_> {
    op.summary("List products")
        .description("Return every product, oldest first.")
        .response_with::<500, Json<ErrorMessage>, _>(|res| res.description("Database query failed"))
}

fn create_product_docs(op: TransformOperation) -> TransformOperation<'_> {
    op.summary("Create product")
        .description(
            r#"
            Create a product with a freshly assigned id.

            An optional `quantity` sets the opening stock, which is recorded as
            a `BUY` transaction.
            "#,
        )
        .response_with::<500, Json<ErrorMessage>, _>(|res| {
            res.description("Database operation failed")
        })
}

fn read_product_docs(op: TransformOperation) -> TransformOperation<'_> {
    op.summary("Get product")
        .response_with::<404, Json<ErrorMessage>, _>(|res| res.description("Product not found"))
        .response_with::<500, Json<ErrorMessage>, _>(|res| res.description("Database query failed"))
}

fn replace_product_docs(op: TransformOperation) -> TransformOperation<'_> {
    op.summary("Replace product")
        .description(
            r#"
            Replace the name, price and details of a product.

            When `quantity` is given, the stock is adjusted to it by recording a
            transaction for the difference.
            "#,
        )
        .response_with::<404, Json<ErrorMessage>, _>(|res| res.description("Product not found"))
        .response_with::<500, Json<ErrorMessage>, _>(|res| {
            res.description("Database operation failed")
        })
}

fn delete_product_docs(op: TransformOperation) -> TransformOperation<'_> {
    op.summary("Delete product")
        .description("Delete a product and its transaction history, returning the deleted product.")
        .response_with::<404, Json<ErrorMessage>, _>(|res| res.description("Product not found"))
        .response_with::<500, Json<ErrorMessage>, _>(|res| {
            res.description("Database operation failed")
        })
}

fn field_docs<'a>(op: TransformOperation<'a>, summary: &str) -> TransformOperation<'a> {
    op.summary(summary)
        .response_with::<404, Json<ErrorMessage>, _>(|res| res.description("Product not found"))
        .response_with::<500, Json<ErrorMessage>, _>(|res| {
            res.description("Database operation failed")
        })
}

fn update_quantity_docs(op: TransformOperation) -> TransformOperation<'_> {
    op.summary("Adjust product stock")
        .description(
            r#"
            Bring the stock of a product to the given level.

            The difference from the current level is recorded as a `BUY` or
            `SELL` transaction. Nothing is recorded when the level is unchanged.
            "#,
        )
        .response_with::<404, Json<ErrorMessage>, _>(|res| res.description("Product not found"))
        .response_with::<500, Json<ErrorMessage>, _>(|res| {
            res.description("Database operation failed")
        })
}
