use anyhow::Result;
use contactbook_http::{AppState, create_router};
use std::sync::Arc;

use crate::{build_service, open_storage};

pub(crate) async fn run(port: u16, host: String, seed_demo: bool) -> Result<()> {
    let storage = open_storage(seed_demo).await?;
    let contact_service = build_service(storage);
    let state = Arc::new(AppState::new(contact_service));

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;
    tracing::info!("HTTP server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
