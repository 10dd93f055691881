//! Entry point for the `sample-gateway` HTTP server.

use std::sync::Arc;

use sample_gateway::{
    config::Settings,
    routes::{create_router, AppState},
};
use sample_store::{FoobarService, MemoryStore};
use tracing::info;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let settings = Arc::new(Settings::from_env());
    let datasource = Arc::new(MemoryStore::new());
    let state = AppState {
        settings: settings.clone(),
        database: datasource.clone(),
        foobars: Arc::new(FoobarService::new(datasource)),
    };
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(&settings.listen_addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %settings.listen_addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(addr = %settings.listen_addr, "sample-gateway listening");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
