use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use contactbook_core::PageLimits;
use contactbook_service::ContactService;
use contactbook_storage::{InMemoryStore, StorageBackend};

mod commands;
mod demo;

#[derive(Parser)]
#[command(name = "contactbook")]
#[command(version, about = "Contact records API with filtering, sorting and pagination", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        #[arg(short, long, default_value = "8080")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
        /// Load demo contacts into the in-memory store
        #[arg(long)]
        seed_demo: bool,
    },
    /// Run one list query and print the page as JSON
    List {
        #[arg(long)]
        sort: Option<String>,
        #[arg(long)]
        direction: Option<String>,
        #[arg(long)]
        page: Option<String>,
        #[arg(long)]
        size: Option<String>,
        #[arg(long)]
        filter_by: Option<String>,
        #[arg(long)]
        filter_value: Option<String>,
    },
}

/// PostgreSQL when `DATABASE_URL` is set (and the `postgres` feature is on),
/// otherwise an in-memory store, optionally seeded with demo contacts.
pub(crate) async fn open_storage(seed_demo: bool) -> Result<StorageBackend> {
    if let Some(backend) = open_postgres().await? {
        return Ok(backend);
    }

    if seed_demo {
        let demo = demo::demo_contacts();
        tracing::info!(count = demo.len(), "Using in-memory contact store with demo data");
        Ok(InMemoryStore::with_contacts(demo).into())
    } else {
        tracing::info!("Using empty in-memory contact store");
        Ok(StorageBackend::in_memory())
    }
}

#[cfg(feature = "postgres")]
async fn open_postgres() -> Result<Option<StorageBackend>> {
    let Ok(url) = std::env::var("DATABASE_URL") else {
        return Ok(None);
    };
    let backend = StorageBackend::new_postgres(&url).await?;
    tracing::info!("Connected to PostgreSQL contact store");
    Ok(Some(backend))
}

#[cfg(not(feature = "postgres"))]
#[allow(clippy::unused_async, reason = "mirrors the postgres variant")]
async fn open_postgres() -> Result<Option<StorageBackend>> {
    if std::env::var_os("DATABASE_URL").is_some() {
        tracing::warn!("DATABASE_URL is set but built without the postgres feature, ignoring");
    }
    Ok(None)
}

pub(crate) fn build_service(storage: StorageBackend) -> Arc<ContactService> {
    let limits = PageLimits::from_env();
    tracing::debug!(default_size = limits.default_size, max_size = limits.max_size, "page limits");
    Arc::new(ContactService::new(Arc::new(storage), limits))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host, seed_demo } => commands::serve::run(port, host, seed_demo).await,
        Commands::List { sort, direction, page, size, filter_by, filter_value } => {
            commands::list::run(commands::list::ListArgs {
                sort,
                direction,
                page,
                size,
                filter_by,
                filter_value,
            })
            .await
        },
    }
}
