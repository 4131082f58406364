use crate::MemoryDb;
use inv_core::{
    models::{
        DateTime, ProductId, ProductRecord, TransactionFailure, TransactionRecord, adjustment,
    },
    ports::TransactionRepository,
};

impl TransactionRepository for MemoryDb {
    async fn apply_transaction(
        &self,
        product_id: ProductId,
        quantity: i64,
        as_of: DateTime,
    ) -> Result<Result<TransactionRecord, TransactionFailure>, Self::Error> {
        // The write guard is the critical section: the quantity read inside
        // `record` cannot change before the new quantity is written back.
        let mut ledger = self.ledger.write().await;
        let result = ledger.record(product_id, quantity, as_of);

        match &result {
            Ok(record) => {
                tracing::debug!(product_id = %product_id, transaction_id = %record.id, quantity, "recorded transaction")
            }
            Err(failure) => {
                tracing::debug!(product_id = %product_id, quantity, %failure, "refused transaction")
            }
        }
        Ok(result)
    }

    async fn set_quantity(
        &self,
        product_id: ProductId,
        quantity: u32,
        as_of: DateTime,
    ) -> Result<Option<ProductRecord>, Self::Error> {
        let mut ledger = self.ledger.write().await;

        let Some(current) = ledger.products.get(&product_id).map(|p| p.quantity) else {
            return Ok(None);
        };

        if let Some(delta) = adjustment(current, quantity) {
            // the target is non-negative, so the stock rule always accepts it
            let _ = ledger.record(product_id, delta, as_of);
        }

        Ok(ledger.products.get(&product_id).cloned())
    }

    async fn list_transactions(
        &self,
        product_id: ProductId,
    ) -> Result<Option<Vec<TransactionRecord>>, Self::Error> {
        let ledger = self.ledger.read().await;

        if !ledger.products.contains_key(&product_id) {
            return Ok(None);
        }

        Ok(Some(
            ledger
                .transactions
                .iter()
                .filter(|t| t.product_id == product_id)
                .cloned()
                .collect(),
        ))
    }
}
