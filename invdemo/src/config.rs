//! Application configuration management.
//!
//! This module handles loading and merging configuration from multiple sources
//! with a clear precedence order. Configuration can come from default values,
//! configuration files, and environment variables.

use crate::Cli;
use serde::{Deserialize, Serialize};

/// Which ledger implementation to serve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// SQLite, in memory unless a connection string is configured
    #[default]
    Sqlite,
    /// A process-local ledger that is lost on exit
    Memory,
}

/// The main application configuration that composes all component configs
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    /// Web server configuration (bind address, CORS)
    #[serde(default)]
    pub server: inv_axum::config::AxumConfig,

    /// Database configuration, used by the SQLite backend
    #[serde(default)]
    pub database: inv_sqlite::config::SqliteConfig,

    /// The ledger implementation
    #[serde(default)]
    pub backend: Backend,
}

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. `DB_URL` / `--database-url` for the connection string
    /// 2. Environment variables
    /// 3. Config file given by the CLI
    /// 4. Default values (lowest priority)
    ///
    /// Environment variables are mapped using the pattern:
    /// `APP_<SECTION>__<KEY>` maps to `<section>.<key>`
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Set database URL via environment variable
    /// export APP_DATABASE__DATABASE_URL="sqlite://inventory.db"
    ///
    /// # Set server bind address
    /// export APP_SERVER__BIND_ADDRESS="0.0.0.0:3000"
    ///
    /// # Serve the in-memory ledger
    /// export APP_BACKEND="memory"
    /// ```
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        // Start with default values
        config = config.add_source(config::Config::try_from(&Self::default())?);

        // Layer on config file if it is specified and exists
        if let Some(path) = &cli.config {
            if path.exists() {
                config = config.add_source(config::File::from(path.as_path()))
            } else {
                return Err(anyhow::anyhow!(
                    "Config file {} does not exist",
                    path.display()
                ));
            }
        }

        // This maps APP_SERVER__BIND_ADDRESS to server.bind_address
        config = config.add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        if let Some(url) = &cli.database_url {
            config = config.set_override("database.database_url", url.as_str())?;
        }

        let built_config = config.build()?;
        built_config.try_deserialize().map_err(Into::into)
    }
}
