//! Repository trait implementations for the SQLite database.
//!
//! This module contains the implementations of all repository traits defined in
//! `inv-core` for the SQLite database backend.

use crate::{
    Db,
    types::{TRANSACTION_COLUMNS, TransactionRow},
};
use inv_core::{
    models::{DateTime, ProductId, TransactionRecord, TransactionType},
    ports::Repository,
};
use sqlx::SqliteConnection;

mod product;
mod transaction;

impl Repository for Db {
    type Error = sqlx::Error;
}

/// Write a stock change that has already passed the stock rule.
///
/// `updated` is the quantity after applying `delta`. The caller must run this
/// inside the same SQL transaction in which it read the current quantity.
pub(crate) async fn record_transaction(
    conn: &mut SqliteConnection,
    product_id: ProductId,
    delta: i64,
    updated: i64,
    as_of: DateTime,
) -> Result<TransactionRecord, sqlx::Error> {
    sqlx::query("update products set quantity = $2 where id = $1")
        .bind(product_id.0)
        .bind(updated)
        .execute(&mut *conn)
        .await?;

    let row: TransactionRow = sqlx::query_as(&format!(
        r#"
        insert into
            transactions (product_id, transaction_date, quantity, type)
        values
            ($1, $2, $3, $4)
        returning
            {TRANSACTION_COLUMNS}
        "#
    ))
    .bind(product_id.0)
    .bind(as_of.to_string())
    .bind(delta)
    .bind(TransactionType::from_delta(delta).as_str())
    .fetch_one(&mut *conn)
    .await?;

    row.try_into()
}

/// Read a product's quantity through the given connection.
pub(crate) async fn current_quantity(
    conn: &mut SqliteConnection,
    product_id: ProductId,
) -> Result<Option<i64>, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("select quantity from products where id = $1")
        .bind(product_id.0)
        .fetch_optional(&mut *conn)
        .await
}
