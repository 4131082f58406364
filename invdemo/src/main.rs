use std::{fs::File, path::Path};

use inv_axum::{ApiApplication, config::AxumConfig, schema, start_server};
use inv_memory::MemoryDb;
use inv_sqlite::Db;
use invdemo::{AppConfig, Backend, Cli, impls::DemoApp};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Everything in the workspace reports through `tracing`; RUST_LOG picks
    // what reaches stdout.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::import()?;

    let AppConfig {
        server,
        database,
        backend,
    } = AppConfig::load(&cli)?;

    let schema_path = cli.schema.as_deref();

    match backend {
        Backend::Sqlite => {
            let db = Db::open(&database).await?;
            serve(DemoApp { db }, server, schema_path).await
        }
        Backend::Memory => {
            tracing::info!("serving the in-memory ledger, nothing will be persisted");
            serve(DemoApp { db: MemoryDb::new() }, server, schema_path).await
        }
    }
}

async fn serve<T: ApiApplication>(
    app: T,
    server: AxumConfig,
    schema_path: Option<&Path>,
) -> anyhow::Result<()> {
    // If requested, dump the schema and exit.
    if let Some(path) = schema_path {
        serde_json::to_writer_pretty(File::create(path)?, &schema(app))?;
        return Ok(());
    }

    start_server(server, app).await?;
    Ok(())
}
