#![warn(missing_docs)]
// Note: this overwrites the link in the README to point to the rust docs of the inv-memory crate.
//! [inv_core]: https://docs.rs/inv_core/latest/inv_core/index.html
//! [inv_memory]: https://docs.rs/inv_memory/latest/inv_memory/index.html
#![doc = include_str!("../README.md")]

use indexmap::IndexMap;
use inv_core::models::{
    DateTime, ProductId, ProductRecord, TransactionFailure, TransactionId, TransactionRecord,
    TransactionType, apply_delta,
};
use rustc_hash::FxBuildHasher;
use std::sync::Arc;
use tokio::sync::RwLock;

mod r#impl;

/// In-process implementation of the ledger.
///
/// Cloning is cheap and every clone shares the same state, so a single
/// `MemoryDb` can be handed to any number of request handlers.
///
/// # Example
///
/// ```
/// # use inv_memory::MemoryDb;
/// # use inv_core::{models::{DateTime, ProductData}, ports::ProductRepository as _};
/// # async fn example() -> Result<(), std::convert::Infallible> {
/// let db = MemoryDb::default();
/// let data = ProductData {
///     name: "Widget".try_into().unwrap(),
///     price: 10.0.try_into().unwrap(),
///     details: "basic".to_owned(),
/// };
/// let product = db.create_product(data, 0, DateTime::now()).await?;
/// assert_eq!(product.quantity, 0);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Default)]
pub struct MemoryDb {
    ledger: Arc<RwLock<Ledger>>,
}

impl MemoryDb {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }
}

/// The state behind the lock.
///
/// Products are kept in creation order. Transactions form a single
/// append-only log; entries only leave it when their product is deleted.
#[derive(Default)]
struct Ledger {
    products: IndexMap<ProductId, ProductRecord, FxBuildHasher>,
    transactions: Vec<TransactionRecord>,
    last_product_id: i64,
    last_transaction_id: i64,
}

impl Ledger {
    fn next_product_id(&mut self) -> ProductId {
        self.last_product_id += 1;
        ProductId(self.last_product_id)
    }

    fn next_transaction_id(&mut self) -> TransactionId {
        self.last_transaction_id += 1;
        TransactionId(self.last_transaction_id)
    }

    /// Apply the stock rule and, if it passes, append the transaction.
    ///
    /// Must be called with the write guard held for the whole call.
    fn record(
        &mut self,
        product_id: ProductId,
        delta: i64,
        as_of: DateTime,
    ) -> Result<TransactionRecord, TransactionFailure> {
        let current = self
            .products
            .get(&product_id)
            .ok_or(TransactionFailure::ProductNotFound(product_id))?
            .quantity;

        let updated = apply_delta(current, delta)?;

        let record = TransactionRecord {
            id: self.next_transaction_id(),
            product_id,
            transaction_date: as_of,
            quantity: delta,
            kind: TransactionType::from_delta(delta),
        };

        if let Some(product) = self.products.get_mut(&product_id) {
            product.quantity = updated;
        }
        self.transactions.push(record.clone());

        Ok(record)
    }
}
