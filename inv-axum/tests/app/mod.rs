mod application;
pub use application::TestApp;

use axum_test::TestServer;
use inv_axum::{config::AxumConfig, router};
use inv_memory::MemoryDb;
use inv_sqlite::{Db, config::SqliteConfig};

/// The ledger implementations every API test runs against.
#[derive(Debug, Clone, Copy)]
pub enum Backend {
    Memory,
    Sqlite,
}

impl Backend {
    /// Build a test server over a fresh, empty ledger.
    pub async fn server(self) -> TestServer {
        let router = match self {
            Backend::Memory => router(TestApp(MemoryDb::new()), AxumConfig::default()),
            Backend::Sqlite => {
                let db = Db::open(&SqliteConfig::default()).await.unwrap();
                router(TestApp(db), AxumConfig::default())
            }
        };
        TestServer::new(router).unwrap()
    }
}
