//! HTTP server module for the charter backend.
//!
//! This module provides an axum-based HTTP server that exposes the quote
//! pipeline, fleet search, session store, and checkout hand-off as a REST
//! API. It reuses the existing service layer, store abstraction, and DTOs
//! from the core library.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Request parsing and validation                         │
//! │  - JSON serialization/deserialization                     │
//! │  - CORS, compression, error handling                      │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/, routes/)                       │
//! │  - Quote pipeline, fleet ranking, rate lookup             │
//! └───────────────────┬──────────────────────────────────────┘
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Store Layer (db/)                                        │
//! │  - Session snapshots (LocalStore)                         │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
