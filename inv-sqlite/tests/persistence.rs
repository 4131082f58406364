mod common;

use common::widget;
use inv_core::{
    models::DateTime,
    ports::{ProductRepository, TransactionRepository},
};
use inv_sqlite::{Db, config::SqliteConfig};

#[tokio::test]
async fn test_file_database_survives_reopen() -> anyhow::Result<()> {
    let path = std::env::temp_dir().join(format!(
        "inv-sqlite-{}-{}.db",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)?
            .as_nanos()
    ));
    let config = SqliteConfig {
        database_url: Some(format!("sqlite://{}", path.display())),
        ..Default::default()
    };

    let product_id = {
        let db = Db::open(&config).await?;
        let product = db.create_product(widget(), 0, DateTime::now()).await?;
        db.apply_transaction(product.id, 8, DateTime::now()).await??;
        db.writer.close().await;
        db.reader.close().await;
        product.id
    };

    // reopening runs the migrations again, which must be a no-op
    let db = Db::open(&config).await?;
    let product = db.get_product(product_id).await?.unwrap();
    assert_eq!(product.quantity, 8);
    assert_eq!(db.list_transactions(product_id).await?.unwrap().len(), 1);

    db.writer.close().await;
    db.reader.close().await;
    let _ = std::fs::remove_file(&path);

    Ok(())
}

#[tokio::test]
async fn test_missing_file_is_not_created_on_request() {
    let path = std::env::temp_dir().join(format!("inv-sqlite-absent-{}.db", std::process::id()));
    let config = SqliteConfig {
        database_url: Some(format!("sqlite://{}", path.display())),
        create_if_missing: false,
        ..Default::default()
    };

    assert!(Db::open(&config).await.is_err());
    assert!(!path.exists());
}
