#![warn(missing_docs)]
// Note: this overwrites the link in the README to point to the rust docs of the inv-sqlite crate.
//! [inv_core]: https://docs.rs/inv_core/latest/inv_core/index.html
//! [inv_sqlite]: https://docs.rs/inv_sqlite/latest/inv_sqlite/index.html
#![doc = include_str!("../README.md")]

use sqlx::sqlite;
use std::str::FromStr;
use tokio::try_join;

pub mod config;
mod r#impl;
mod types;

use config::SqliteConfig;

/// SQLite database implementation of the inventory ledger.
///
/// This struct provides separate reader and writer connection pools to a SQLite database,
/// implementing all the repository traits defined in `inv-core`. The separation of read
/// and write connections allows for better concurrency control and follows SQLite best
/// practices for Write-Ahead Logging (WAL) mode.
///
/// # Connection Management
///
/// - `reader`: A connection pool for read operations, allowing concurrent reads
/// - `writer`: A single-connection pool for write operations, ensuring serialized writes
///
/// # Example
///
/// ```no_run
/// # use inv_sqlite::{Db, config::SqliteConfig};
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let db = Db::open(&SqliteConfig::default()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Db {
    /// Connection pool for read operations
    pub reader: sqlx::Pool<sqlx::Sqlite>,
    /// Connection pool for write operations (limited to 1 connection)
    pub writer: sqlx::Pool<sqlx::Sqlite>,
}

impl Db {
    /// Open a connection to the specified SQLite database.
    ///
    /// Creates a new database if one doesn't exist (when `create_if_missing` is true)
    /// and applies all pending migrations.
    ///
    /// # Database Configuration
    ///
    /// - WAL mode for better concurrency
    /// - Foreign keys enabled, which the transaction cascade depends on
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if:
    /// - The connection string cannot be parsed
    /// - Database connection fails
    /// - Migrations fail to apply
    pub async fn open(config: &SqliteConfig) -> Result<Self, sqlx::Error> {
        let url = config.database_url.as_deref().unwrap_or("sqlite::memory:");

        let options = sqlite::SqliteConnectOptions::from_str(url)?
            .busy_timeout(config.busy_timeout)
            .foreign_keys(true)
            .journal_mode(sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlite::SqliteSynchronous::Normal)
            .pragma("journal_size_limit", "27103364")
            .pragma("mmap_size", "134217728")
            .pragma("temp_store", "memory")
            .create_if_missing(config.create_if_missing);

        // Cloning the options keeps both pools pointed at the same database,
        // including the shared in-memory one.
        let reader = sqlite::SqlitePoolOptions::new().connect_with(options.clone());
        // The writer never retires its connection, so an in-memory database
        // outlives idle periods.
        let writer = sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options);

        let (reader, writer) = try_join!(reader, writer)?;

        // Run any pending migrations before returning
        sqlx::migrate!("./schema").run(&writer).await?;

        tracing::info!(url, "opened inventory database");

        Ok(Self { reader, writer })
    }
}
