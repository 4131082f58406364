use crate::models::{DateTime, ProductId, ProductRecord, TransactionFailure, TransactionRecord};

/// Repository interface for recording stock transactions.
///
/// Implementations must run the read of the current quantity, the check in
/// [`apply_delta`](crate::models::apply_delta) and the write of the new
/// quantity and transaction as a single atomic unit with respect to other
/// writers of the same product.
pub trait TransactionRepository: super::Repository {
    /// Record a change of `quantity` units to the stock of a product.
    ///
    /// # Returns
    ///
    /// - Ok(Ok(record)) if the transaction was applied
    /// - Ok(Err(failure)) if the product does not exist, the quantity is zero,
    ///   or there is not enough stock; nothing is written in that case
    /// - Err(repository_error) if there is some other error
    fn apply_transaction(
        &self,
        product_id: ProductId,
        quantity: i64,
        as_of: DateTime,
    ) -> impl Future<Output = Result<Result<TransactionRecord, TransactionFailure>, Self::Error>> + Send;

    /// Bring a product's stock to exactly `quantity` units.
    ///
    /// The difference is recorded as a transaction dated `as_of`; when there is
    /// no difference nothing is recorded.
    ///
    /// # Returns
    ///
    /// - Ok(Some(record)) with the updated product
    /// - Ok(None) if the product does not exist
    fn set_quantity(
        &self,
        product_id: ProductId,
        quantity: u32,
        as_of: DateTime,
    ) -> impl Future<Output = Result<Option<ProductRecord>, Self::Error>> + Send;

    /// List the transactions of a product, oldest first.
    ///
    /// # Returns
    ///
    /// Ok(None) if the product does not exist.
    fn list_transactions(
        &self,
        product_id: ProductId,
    ) -> impl Future<Output = Result<Option<Vec<TransactionRecord>>, Self::Error>> + Send;
}
