//! Row types for mapping between SQLite and the `inv-core` models.
//!
//! Columns are read into plain rows first and then converted, so that a value
//! which no longer satisfies the domain constraints surfaces as a decode error
//! rather than a panic.

use inv_core::models::{
    DateTime, Price, ProductData, ProductId, ProductName, ProductRecord, TransactionId,
    TransactionRecord, TransactionType,
};

/// The column list matching [`ProductRow`].
pub(crate) const PRODUCT_COLUMNS: &str = "id, name, price, quantity, details";

/// The column list matching [`TransactionRow`].
pub(crate) const TRANSACTION_COLUMNS: &str = "id, product_id, transaction_date, quantity, type";

#[derive(sqlx::FromRow)]
pub(crate) struct ProductRow {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    pub details: String,
}

#[derive(sqlx::FromRow)]
pub(crate) struct TransactionRow {
    pub id: i64,
    pub product_id: i64,
    pub transaction_date: String,
    pub quantity: i64,
    #[sqlx(rename = "type")]
    pub kind: String,
}

fn decode_error<E: std::error::Error + Send + Sync + 'static>(err: E) -> sqlx::Error {
    sqlx::Error::Decode(Box::new(err))
}

impl TryFrom<ProductRow> for ProductRecord {
    type Error = sqlx::Error;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        Ok(ProductRecord {
            id: ProductId(row.id),
            quantity: row.quantity,
            data: ProductData {
                name: ProductName::try_from(row.name).map_err(decode_error)?,
                price: Price::try_from(row.price).map_err(decode_error)?,
                details: row.details,
            },
        })
    }
}

impl TryFrom<TransactionRow> for TransactionRecord {
    type Error = sqlx::Error;

    fn try_from(row: TransactionRow) -> Result<Self, Self::Error> {
        Ok(TransactionRecord {
            id: TransactionId(row.id),
            product_id: ProductId(row.product_id),
            transaction_date: row
                .transaction_date
                .parse::<DateTime>()
                .map_err(decode_error)?,
            quantity: row.quantity,
            kind: row.kind.parse::<TransactionType>().map_err(decode_error)?,
        })
    }
}
