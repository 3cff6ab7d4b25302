//! Session-store module for booking-session snapshots.
//!
//! This module provides abstractions for session persistence via the
//! Repository pattern, allowing different storage backends to be swapped
//! easily. A booking session is a simple key-value snapshot of the current
//! route selection; the real product attaches a hosted database here, this
//! crate ships an in-memory backend.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API, server binary)            │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs) - Business Logic           │
//! │  - Snapshot checksums / redundant-write suppression      │
//! │  - Timestamp stamping                                    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Store Trait (repository/) - Abstract Interface         │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────────────────────────┐
//!     │              Local Store                      │
//!     │              (in-memory)                      │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! # Recommended Usage
//!
//! **Use the service layer:**
//! ```ignore
//! use charter_rust::db::{factory, services};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     factory::init_store()?;
//!     let store = factory::get_store()?;
//!
//!     let sessions = services::list_sessions(store.as_ref()).await?;
//!     Ok(())
//! }
//! ```

#[cfg(not(feature = "local-store"))]
compile_error!("Enable at least one session-store backend feature.");

pub mod checksum;
pub mod factory;
pub mod models;
pub mod repositories;
pub mod repository;
pub mod services;


// ==================== Service Layer ====================

pub use services::{
    clear_selection, health_check, list_sessions, load_selection, save_selection,
};

// ==================== Repository Pattern Exports ====================

pub use checksum::snapshot_checksum;
pub use factory::{get_store, init_store, StoreFactory, StoreType};
pub use models::{RouteSelection, SessionSnapshot};
pub use repositories::LocalStore;
pub use repository::{SessionStore, StoreError, StoreResult};
