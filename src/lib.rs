//! # Charter Rust Backend
//!
//! Quote computation engine for a private-jet charter booking product.
//!
//! This crate provides the Rust backend for the charter platform: route
//! distance computation, refuel-stop planning, flight-time and price
//! estimation, loyalty rewards, and fleet filtering/ranking. The backend
//! exposes a REST API via Axum for the web frontend.
//!
//! ## Features
//!
//! - **Route Geometry**: Great-circle distance over ordered waypoint routes
//! - **Quote Pipeline**: Stops, billable hours, price, and rewards from a
//!   route and an aircraft profile
//! - **Fleet Search**: Filter the aircraft catalog and rank matches by price
//! - **Session Store**: Pluggable persistence for booking-session snapshots
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Public data types shared across layers (waypoints, itineraries, ids)
//! - [`models`]: Aircraft catalog and quote domain types
//! - [`services`]: Pure computation pipeline and external collaborators
//! - [`db`]: Session-store abstraction and persistence layer
//! - [`routes`]: Route-specific data types and assembly logic
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Determinism
//!
//! The computation pipeline is pure: the same itinerary and aircraft profile
//! always produce the same quote. Handlers may therefore recompute quotes on
//! every request instead of caching derived state.

pub mod api;

pub mod db;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
