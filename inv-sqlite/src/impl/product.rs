use super::record_transaction;
use crate::{
    Db,
    types::{PRODUCT_COLUMNS, ProductRow},
};
use inv_core::{
    models::{DateTime, ProductData, ProductId, ProductRecord, ProductUpdate},
    ports::ProductRepository,
};

impl ProductRepository for Db {
    async fn create_product(
        &self,
        data: ProductData,
        opening_quantity: u32,
        as_of: DateTime,
    ) -> Result<ProductRecord, Self::Error> {
        let mut tx = self.writer.begin().await?;

        let row: ProductRow = sqlx::query_as(&format!(
            r#"
            insert into
                products (name, price, quantity, details)
            values
                ($1, $2, 0, $3)
            returning
                {PRODUCT_COLUMNS}
            "#
        ))
        .bind(String::from(data.name))
        .bind(data.price.value())
        .bind(data.details)
        .fetch_one(&mut *tx)
        .await?;

        let mut record = ProductRecord::try_from(row)?;

        if opening_quantity > 0 {
            let delta = i64::from(opening_quantity);
            record_transaction(&mut tx, record.id, delta, delta, as_of).await?;
            record.quantity = delta;
        }

        tx.commit().await?;

        tracing::debug!(product_id = %record.id, opening_quantity, "created product");
        Ok(record)
    }

    async fn list_products(&self) -> Result<Vec<ProductRecord>, Self::Error> {
        sqlx::query_as::<_, ProductRow>(&format!(
            "select {PRODUCT_COLUMNS} from products order by id"
        ))
        .fetch_all(&self.reader)
        .await?
        .into_iter()
        .map(ProductRecord::try_from)
        .collect()
    }

    async fn get_product(&self, product_id: ProductId) -> Result<Option<ProductRecord>, Self::Error> {
        sqlx::query_as::<_, ProductRow>(&format!(
            "select {PRODUCT_COLUMNS} from products where id = $1"
        ))
        .bind(product_id.0)
        .fetch_optional(&self.reader)
        .await?
        .map(ProductRecord::try_from)
        .transpose()
    }

    async fn update_product(
        &self,
        product_id: ProductId,
        update: ProductUpdate,
    ) -> Result<Option<ProductRecord>, Self::Error> {
        // absent fields bind as null and keep their current value
        sqlx::query_as::<_, ProductRow>(&format!(
            r#"
            update
                products
            set
                name = coalesce($2, name),
                price = coalesce($3, price),
                details = coalesce($4, details)
            where
                id = $1
            returning
                {PRODUCT_COLUMNS}
            "#
        ))
        .bind(product_id.0)
        .bind(update.name.map(String::from))
        .bind(update.price.map(|price| price.value()))
        .bind(update.details)
        .fetch_optional(&self.writer)
        .await?
        .map(ProductRecord::try_from)
        .transpose()
    }

    async fn delete_product(
        &self,
        product_id: ProductId,
    ) -> Result<Option<ProductRecord>, Self::Error> {
        // foreign keys are enabled on every connection, so this cascades
        let deleted = sqlx::query_as::<_, ProductRow>(&format!(
            "delete from products where id = $1 returning {PRODUCT_COLUMNS}"
        ))
        .bind(product_id.0)
        .fetch_optional(&self.writer)
        .await?
        .map(ProductRecord::try_from)
        .transpose()?;

        if deleted.is_some() {
            tracing::debug!(product_id = %product_id, "deleted product");
        }
        Ok(deleted)
    }
}
