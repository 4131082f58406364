//! Configuration types for the SQLite database connection.
//!
//! This module provides configuration options for establishing and managing
//! SQLite database connections.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for SQLite database connections.
///
/// # Examples
///
/// ```
/// use inv_sqlite::config::SqliteConfig;
///
/// // In-memory database (default)
/// let config = SqliteConfig::default();
///
/// // File-based database
/// let config = SqliteConfig {
///     database_url: Some("sqlite://inventory.db".to_owned()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SqliteConfig {
    /// Connection string, e.g. `sqlite://inventory.db`. If None, uses a
    /// private in-memory database
    #[serde(default)]
    pub database_url: Option<String>,

    /// Whether to create the database if it doesn't exist
    #[serde(default = "default_true")]
    pub create_if_missing: bool,

    /// How long a connection waits on a locked database before giving up
    #[serde(default = "default_busy_timeout", with = "humantime_serde")]
    pub busy_timeout: Duration,
}

fn default_true() -> bool {
    true
}

fn default_busy_timeout() -> Duration {
    Duration::from_secs(5)
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            create_if_missing: true,
            busy_timeout: default_busy_timeout(),
        }
    }
}
