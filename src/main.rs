mod config;
mod routes;
mod state;
mod store;

use std::sync::Arc;

use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port = match config::port_from_env() {
        Ok(port) => port,
        Err(e) => {
            error!(error = %e, "invalid server configuration");
            std::process::exit(2);
        }
    };

    let backend = match config::SupabaseConfig::from_env() {
        Ok(backend) => backend,
        Err(e) => {
            error!(error = %e, "meeting backend not configured");
            std::process::exit(2);
        }
    };
    info!(url = %backend.url, table = %backend.table, "meeting backend configured");

    let store = match store::SupabaseStore::new(&backend) {
        Ok(store) => store,
        Err(e) => {
            error!(error = %e, "meeting store init failed");
            std::process::exit(1);
        }
    };

    let state = state::AppState::new(Arc::new(store));
    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    info!(%port, "meetflow listening");
    axum::serve(listener, app).await.expect("server failed");
}
