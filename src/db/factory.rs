//! Store backend selection and process-wide initialization.

use crate::db::repositories::LocalStore;
use crate::db::repository::{SessionStore, StoreError, StoreResult};
use std::sync::{Arc, OnceLock};

/// Available session-store backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreType {
    /// Process-local in-memory store
    Local,
}

impl StoreType {
    /// Resolve the backend from the `SESSION_STORE` environment variable.
    ///
    /// Defaults to `local` when unset; anything else is a configuration
    /// error (the hosted-database backend attaches outside this crate).
    pub fn from_env() -> StoreResult<Self> {
        match std::env::var("SESSION_STORE")
            .unwrap_or_else(|_| "local".to_string())
            .to_lowercase()
            .as_str()
        {
            "local" | "memory" => Ok(StoreType::Local),
            other => Err(StoreError::configuration(format!(
                "Unsupported SESSION_STORE '{}'. Use 'local'.",
                other
            ))),
        }
    }
}

/// Factory for creating store instances.
pub struct StoreFactory;

impl StoreFactory {
    pub fn create(store_type: StoreType) -> StoreResult<Arc<dyn SessionStore>> {
        match store_type {
            StoreType::Local => Ok(Arc::new(LocalStore::new())),
        }
    }
}

static STORE: OnceLock<Arc<dyn SessionStore>> = OnceLock::new();

/// Initialize the process-wide store once, from environment configuration.
///
/// Subsequent calls are no-ops; the first configuration wins.
pub fn init_store() -> StoreResult<()> {
    if STORE.get().is_some() {
        return Ok(());
    }
    let store = StoreFactory::create(StoreType::from_env()?)?;
    let _ = STORE.set(store);
    Ok(())
}

/// The process-wide store initialized by [`init_store`].
pub fn get_store() -> StoreResult<&'static Arc<dyn SessionStore>> {
    STORE
        .get()
        .ok_or_else(|| StoreError::configuration("session store not initialized"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_local_store() {
        let store = StoreFactory::create(StoreType::Local).unwrap();
        // A fresh store must report healthy.
        let healthy = tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(store.health_check())
            .unwrap();
        assert!(healthy);
    }

    #[test]
    fn test_init_is_idempotent() {
        init_store().unwrap();
        init_store().unwrap();
        assert!(get_store().is_ok());
    }
}
