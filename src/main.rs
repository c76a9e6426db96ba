use clap::Parser;
use miette::{IntoDiagnostic, Result};
use paytrail::application::service::TransactionService;
use paytrail::domain::ports::TransactionStoreBox;
use paytrail::infrastructure::in_memory::InMemoryTransactionStore;
#[cfg(feature = "storage-rocksdb")]
use paytrail::infrastructure::rocksdb::RocksDBStore;
use paytrail::interfaces::http;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1:8080")]
    listen: SocketAddr,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[cfg(feature = "storage-rocksdb")]
    #[arg(long)]
    db_path: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store = build_store(&cli)?;
    let service = Arc::new(TransactionService::new(store));
    let app = http::router(service);

    let listener = tokio::net::TcpListener::bind(cli.listen)
        .await
        .into_diagnostic()?;
    tracing::info!("listening on {}", cli.listen);
    axum::serve(listener, app).await.into_diagnostic()?;

    Ok(())
}

#[cfg(feature = "storage-rocksdb")]
fn build_store(cli: &Cli) -> Result<TransactionStoreBox> {
    if let Some(db_path) = &cli.db_path {
        let store = RocksDBStore::open(db_path).into_diagnostic()?;
        tracing::info!("using RocksDB store at {}", db_path.display());
        Ok(Box::new(store))
    } else {
        Ok(Box::new(InMemoryTransactionStore::new()))
    }
}

#[cfg(not(feature = "storage-rocksdb"))]
fn build_store(_cli: &Cli) -> Result<TransactionStoreBox> {
    Ok(Box::new(InMemoryTransactionStore::new()))
}
