use inv_core::models::ProductData;
use inv_sqlite::{Db, config::SqliteConfig};

pub async fn memory_db() -> anyhow::Result<Db> {
    Ok(Db::open(&SqliteConfig::default()).await?)
}

pub fn widget() -> ProductData {
    ProductData {
        name: "Widget".try_into().unwrap(),
        price: 10.0.try_into().unwrap(),
        details: "basic".to_string(),
    }
}
