//! Abstract session-store interface.
//!
//! Implementations live in [`crate::db::repositories`]; application code
//! goes through the service layer in [`crate::db::services`].

pub mod error;

pub use error::{ErrorContext, StoreError, StoreResult};

use crate::api::{SessionId, SessionInfo};
use crate::db::models::SessionSnapshot;
use async_trait::async_trait;

/// Storage backend for booking-session snapshots.
///
/// The store is a plain key-value surface: one snapshot per session,
/// replaced wholesale on save. Consistency between fields of a snapshot is
/// the service layer's concern, not the backend's.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persist a snapshot, replacing any previous one for the session.
    async fn save_snapshot(&self, snapshot: &SessionSnapshot) -> StoreResult<()>;

    /// Load the snapshot for a session.
    ///
    /// # Errors
    /// [`StoreError::NotFound`] when the session has no snapshot.
    async fn load_snapshot(&self, session_id: &SessionId) -> StoreResult<SessionSnapshot>;

    /// Remove a session's snapshot. Removing an absent session is not an
    /// error.
    async fn delete_snapshot(&self, session_id: &SessionId) -> StoreResult<()>;

    /// List known sessions, most recently updated first.
    async fn list_sessions(&self) -> StoreResult<Vec<SessionInfo>>;

    /// Whether the backend is reachable.
    async fn health_check(&self) -> StoreResult<bool>;
}
