use super::{current_quantity, record_transaction};
use crate::{
    Db,
    types::{PRODUCT_COLUMNS, ProductRow, TRANSACTION_COLUMNS, TransactionRow},
};
use inv_core::{
    models::{
        DateTime, ProductId, ProductRecord, TransactionFailure, TransactionRecord, adjustment,
        apply_delta,
    },
    ports::TransactionRepository,
};

impl TransactionRepository for Db {
    async fn apply_transaction(
        &self,
        product_id: ProductId,
        quantity: i64,
        as_of: DateTime,
    ) -> Result<Result<TransactionRecord, TransactionFailure>, Self::Error> {
        // The writer pool holds a single connection, and the read, the check
        // and both writes share one SQL transaction.
        let mut tx = self.writer.begin().await?;

        let Some(current) = current_quantity(&mut tx, product_id).await? else {
            return Ok(Err(TransactionFailure::ProductNotFound(product_id)));
        };

        let updated = match apply_delta(current, quantity) {
            Ok(updated) => updated,
            Err(failure) => {
                tracing::debug!(product_id = %product_id, quantity, %failure, "refused transaction");
                return Ok(Err(failure));
            }
        };

        let record = record_transaction(&mut tx, product_id, quantity, updated, as_of).await?;
        tx.commit().await?;

        tracing::debug!(product_id = %product_id, transaction_id = %record.id, quantity, "recorded transaction");
        Ok(Ok(record))
    }

    async fn set_quantity(
        &self,
        product_id: ProductId,
        quantity: u32,
        as_of: DateTime,
    ) -> Result<Option<ProductRecord>, Self::Error> {
        let mut tx = self.writer.begin().await?;

        let Some(current) = current_quantity(&mut tx, product_id).await? else {
            return Ok(None);
        };

        if let Some(delta) = adjustment(current, quantity) {
            record_transaction(&mut tx, product_id, delta, i64::from(quantity), as_of).await?;
        }

        let row: ProductRow = sqlx::query_as(&format!(
            "select {PRODUCT_COLUMNS} from products where id = $1"
        ))
        .bind(product_id.0)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        ProductRecord::try_from(row).map(Some)
    }

    async fn list_transactions(
        &self,
        product_id: ProductId,
    ) -> Result<Option<Vec<TransactionRecord>>, Self::Error> {
        // Read both under one transaction so a concurrent delete cannot slip
        // between the existence check and the listing.
        let mut tx = self.reader.begin().await?;

        let exists = sqlx::query_scalar::<_, bool>(
            "select exists (select 1 from products where id = $1)",
        )
        .bind(product_id.0)
        .fetch_one(&mut *tx)
        .await?;

        if !exists {
            return Ok(None);
        }

        let rows: Vec<TransactionRow> = sqlx::query_as(&format!(
            "select {TRANSACTION_COLUMNS} from transactions where product_id = $1 order by id"
        ))
        .bind(product_id.0)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        rows.into_iter()
            .map(TransactionRecord::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }
}
