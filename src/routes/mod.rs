//! Route-specific data types and assembly logic.
//!
//! Each submodule owns the DTOs for one endpoint family and the glue that
//! turns service-layer output into them. The types are re-exported through
//! [`crate::api`].

pub mod checkout;
pub mod fleet;
pub mod quote;
pub mod sessions;
