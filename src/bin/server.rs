//! Charter HTTP Server Binary
//!
//! This is the main entry point for the charter REST API server.
//! It loads the aircraft catalog, initializes the session store, sets up the
//! HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin charter-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `CATALOG_PATH`: TOML fleet catalog override (default: built-in fleet)
//! - `SESSION_STORE`: Session-store backend (default: local)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use charter_rust::db;
use charter_rust::http::{create_router, AppState};
use charter_rust::models::AircraftCatalog;
use charter_rust::services::checkout::RecordingGateway;
use charter_rust::services::rates::StaticRateTable;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting charter HTTP server");

    // Load the aircraft catalog once; it is immutable for the process lifetime.
    let catalog = match env::var("CATALOG_PATH") {
        Ok(path) => {
            info!("Loading fleet catalog from {}", path);
            AircraftCatalog::from_path(&path)?
        }
        Err(_) => AircraftCatalog::builtin(),
    };
    info!("Fleet catalog loaded with {} aircraft", catalog.len());

    // Initialize the session store once and reuse it across the app
    db::init_store().map_err(|e| anyhow::anyhow!(e))?;
    let store = Arc::clone(db::get_store()?);
    info!("Session store initialized successfully");

    // Create application state
    let state = AppState::new(
        Arc::new(catalog),
        store,
        Arc::new(StaticRateTable::default()),
        Arc::new(RecordingGateway::new()),
    );

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
