use crate::MemoryDb;
use inv_core::{
    models::{DateTime, ProductData, ProductId, ProductRecord, ProductUpdate},
    ports::ProductRepository,
};

impl ProductRepository for MemoryDb {
    async fn create_product(
        &self,
        data: ProductData,
        opening_quantity: u32,
        as_of: DateTime,
    ) -> Result<ProductRecord, Self::Error> {
        let mut ledger = self.ledger.write().await;

        let id = ledger.next_product_id();
        ledger.products.insert(
            id,
            ProductRecord {
                id,
                quantity: 0,
                data,
            },
        );

        if opening_quantity > 0 {
            // the product exists and the delta is positive, so this cannot fail
            let _ = ledger.record(id, i64::from(opening_quantity), as_of);
        }

        tracing::debug!(product_id = %id, opening_quantity, "created product");
        Ok(ledger.products[&id].clone())
    }

    async fn list_products(&self) -> Result<Vec<ProductRecord>, Self::Error> {
        let ledger = self.ledger.read().await;
        Ok(ledger.products.values().cloned().collect())
    }

    async fn get_product(&self, product_id: ProductId) -> Result<Option<ProductRecord>, Self::Error> {
        let ledger = self.ledger.read().await;
        Ok(ledger.products.get(&product_id).cloned())
    }

    async fn update_product(
        &self,
        product_id: ProductId,
        update: ProductUpdate,
    ) -> Result<Option<ProductRecord>, Self::Error> {
        let mut ledger = self.ledger.write().await;
        Ok(ledger.products.get_mut(&product_id).map(|product| {
            update.apply(&mut product.data);
            product.clone()
        }))
    }

    async fn delete_product(
        &self,
        product_id: ProductId,
    ) -> Result<Option<ProductRecord>, Self::Error> {
        let mut ledger = self.ledger.write().await;

        // shift_remove keeps the remaining products in creation order
        let Some(product) = ledger.products.shift_remove(&product_id) else {
            return Ok(None);
        };
        ledger.transactions.retain(|t| t.product_id != product_id);

        tracing::debug!(product_id = %product_id, "deleted product");
        Ok(Some(product))
    }
}
