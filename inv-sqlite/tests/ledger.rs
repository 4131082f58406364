mod common;

use common::{memory_db, widget};
use inv_core::{
    models::{DateTime, ProductId, ProductUpdate, TransactionFailure, TransactionType},
    ports::{ProductRepository, TransactionRepository},
};

#[tokio::test]
async fn test_widget_lifecycle() -> anyhow::Result<()> {
    let db = memory_db().await?;
    let now = DateTime::now();

    let product = db.create_product(widget(), 0, now).await?;
    assert_eq!(product.id, ProductId(1));
    assert_eq!(product.quantity, 0);
    assert_eq!(db.get_product(product.id).await?, Some(product.clone()));

    let buy = db.apply_transaction(product.id, 5, now).await??;
    assert_eq!(buy.product_id, product.id);
    assert_eq!(buy.quantity, 5);
    assert_eq!(buy.kind, TransactionType::Buy);
    assert_eq!(buy.transaction_date, now);
    assert_eq!(db.get_product(product.id).await?.unwrap().quantity, 5);

    assert_eq!(
        db.apply_transaction(product.id, -10, now).await?,
        Err(TransactionFailure::InsufficientStock {
            available: 5,
            requested: 10
        })
    );
    assert_eq!(db.get_product(product.id).await?.unwrap().quantity, 5);

    assert_eq!(
        db.apply_transaction(product.id, 0, now).await?,
        Err(TransactionFailure::InvalidQuantity)
    );

    let sell = db.apply_transaction(product.id, -5, now).await??;
    assert_eq!(sell.kind, TransactionType::Sell);
    assert_eq!(db.get_product(product.id).await?.unwrap().quantity, 0);

    assert!(db.delete_product(product.id).await?.is_some());
    assert_eq!(db.get_product(product.id).await?, None);
    assert_eq!(db.delete_product(product.id).await?, None);

    Ok(())
}

#[tokio::test]
async fn test_unknown_product_records_nothing() -> anyhow::Result<()> {
    let db = memory_db().await?;
    let now = DateTime::now();

    let missing = ProductId(7);
    assert_eq!(
        db.apply_transaction(missing, 5, now).await?,
        Err(TransactionFailure::ProductNotFound(missing))
    );
    assert_eq!(db.set_quantity(missing, 1, now).await?, None);
    assert_eq!(db.update_product(missing, widget().into()).await?, None);
    assert_eq!(db.list_transactions(missing).await?, None);

    let count: i64 = sqlx::query_scalar("select count(*) from transactions")
        .fetch_one(&db.reader)
        .await?;
    assert_eq!(count, 0);

    Ok(())
}

#[tokio::test]
async fn test_delete_cascades_to_transactions() -> anyhow::Result<()> {
    let db = memory_db().await?;
    let now = DateTime::now();

    let kept = db.create_product(widget(), 4, now).await?;
    let dropped = db.create_product(widget(), 6, now).await?;
    db.apply_transaction(dropped.id, -2, now).await??;

    db.delete_product(dropped.id).await?;

    let remaining: Vec<i64> = sqlx::query_scalar("select product_id from transactions")
        .fetch_all(&db.reader)
        .await?;
    assert_eq!(remaining, vec![kept.id.0]);

    Ok(())
}

#[tokio::test]
async fn test_quantity_matches_transaction_history() -> anyhow::Result<()> {
    let db = memory_db().await?;
    let now = DateTime::now();

    let product = db.create_product(widget(), 7, now).await?;
    assert_eq!(product.quantity, 7);

    for delta in [3, -4, 0, -100, 12, -18] {
        let _ = db.apply_transaction(product.id, delta, now).await?;
    }
    let adjusted = db.set_quantity(product.id, 2, now).await?.unwrap();
    assert_eq!(adjusted.quantity, 2);
    db.set_quantity(product.id, 2, now).await?;

    let history = db.list_transactions(product.id).await?.unwrap();
    let deltas: Vec<i64> = history.iter().map(|t| t.quantity).collect();
    assert_eq!(deltas, vec![7, 3, -4, 12, -18, 2]);
    assert_eq!(deltas.iter().sum::<i64>(), 2);

    Ok(())
}

#[tokio::test]
async fn test_partial_updates() -> anyhow::Result<()> {
    let db = memory_db().await?;
    let product = db.create_product(widget(), 3, DateTime::now()).await?;

    let repriced = db
        .update_product(
            product.id,
            ProductUpdate {
                price: Some(12.346.try_into().unwrap()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();
    assert_eq!(repriced.data.price.value(), 12.35);
    assert_eq!(&*repriced.data.name, "Widget");
    assert_eq!(repriced.data.details, "basic");
    assert_eq!(repriced.quantity, 3);

    let described = db
        .update_product(
            product.id,
            ProductUpdate {
                details: Some(String::new()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();
    assert_eq!(described.data.details, "");
    assert_eq!(described.data.price.value(), 12.35);

    assert_eq!(db.list_products().await?, vec![described]);

    Ok(())
}

// Without a multithreaded runtime, the sells would never actually race
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_sells_never_oversell() -> anyhow::Result<()> {
    let db = memory_db().await?;
    let product_id = db.create_product(widget(), 10, DateTime::now()).await?.id;

    let tasks: Vec<_> = (0..40)
        .map(|_| {
            let db = db.clone();
            tokio::spawn(async move { db.apply_transaction(product_id, -1, DateTime::now()).await })
        })
        .collect();

    let mut accepted = 0;
    for task in tasks {
        if task.await??.is_ok() {
            accepted += 1;
        }
    }

    assert_eq!(accepted, 10);
    assert_eq!(db.get_product(product_id).await?.unwrap().quantity, 0);
    assert_eq!(db.list_transactions(product_id).await?.unwrap().len(), 11);

    Ok(())
}
