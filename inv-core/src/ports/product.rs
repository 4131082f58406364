use crate::models::{DateTime, ProductData, ProductId, ProductRecord, ProductUpdate};

/// Repository interface for product CRUD operations.
///
/// Products are listed in the order they were created. None of these
/// operations may change a product's quantity directly; the only exception is
/// the opening stock of [`create_product`](ProductRepository::create_product),
/// which is recorded as a transaction.
pub trait ProductRepository: super::Repository {
    /// Create a new product with a freshly assigned id.
    ///
    /// A non-zero `opening_quantity` is recorded as a `BUY` transaction dated
    /// `as_of`, atomically with the creation of the product.
    fn create_product(
        &self,
        data: ProductData,
        opening_quantity: u32,
        as_of: DateTime,
    ) -> impl Future<Output = Result<ProductRecord, Self::Error>> + Send;

    /// List every product, oldest first.
    fn list_products(&self) -> impl Future<Output = Result<Vec<ProductRecord>, Self::Error>> + Send;

    /// Retrieve a product.
    ///
    /// # Returns
    ///
    /// Ok(None) if the product does not exist.
    fn get_product(
        &self,
        product_id: ProductId,
    ) -> impl Future<Output = Result<Option<ProductRecord>, Self::Error>> + Send;

    /// Replace any subset of a product's name, price and details.
    ///
    /// # Returns
    ///
    /// - Ok(Some(record)) with the updated product
    /// - Ok(None) if the product does not exist
    fn update_product(
        &self,
        product_id: ProductId,
        update: ProductUpdate,
    ) -> impl Future<Output = Result<Option<ProductRecord>, Self::Error>> + Send;

    /// Delete a product along with its transaction history.
    ///
    /// # Returns
    ///
    /// - Ok(Some(record)) with the product as it was before deletion
    /// - Ok(None) if the product does not exist
    fn delete_product(
        &self,
        product_id: ProductId,
    ) -> impl Future<Output = Result<Option<ProductRecord>, Self::Error>> + Send;
}
