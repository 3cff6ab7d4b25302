//! Application state for the HTTP server.

use crate::db::repository::SessionStore;
use crate::models::AircraftCatalog;
use crate::services::checkout::CheckoutGateway;
use crate::services::rates::StaticRateTable;
use std::sync::Arc;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Immutable aircraft catalog loaded at startup
    pub catalog: Arc<AircraftCatalog>,
    /// Session-store backend
    pub store: Arc<dyn SessionStore>,
    /// Display-currency rate table
    pub rates: Arc<StaticRateTable>,
    /// Payment hand-off collaborator
    pub gateway: Arc<dyn CheckoutGateway>,
}

impl AppState {
    pub fn new(
        catalog: Arc<AircraftCatalog>,
        store: Arc<dyn SessionStore>,
        rates: Arc<StaticRateTable>,
        gateway: Arc<dyn CheckoutGateway>,
    ) -> Self {
        Self {
            catalog,
            store,
            rates,
            gateway,
        }
    }
}
