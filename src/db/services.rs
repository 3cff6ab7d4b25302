//! High-level session-store operations.
//!
//! These functions sit between the HTTP handlers and the store trait: they
//! stamp checksums and timestamps, log, and keep cross-cutting concerns out
//! of both the handlers and the backends. Use these in application code
//! rather than calling the trait directly.

use crate::api::{SessionId, SessionInfo};
use crate::db::checksum::snapshot_checksum;
use crate::db::models::{RouteSelection, SessionSnapshot};
use crate::db::repository::{SessionStore, StoreResult};

/// Persist a session's current route selection.
///
/// Computes the content checksum and stamps the update time; backends use
/// the checksum to suppress writes for unchanged selections.
pub async fn save_selection(
    store: &dyn SessionStore,
    session_id: &SessionId,
    selection: &RouteSelection,
) -> StoreResult<SessionSnapshot> {
    let snapshot = SessionSnapshot {
        session_id: session_id.clone(),
        checksum: snapshot_checksum(selection),
        selection: selection.clone(),
        updated_at: chrono::Utc::now(),
    };

    store.save_snapshot(&snapshot).await?;
    log::info!("saved selection for session {}", session_id);
    Ok(snapshot)
}

/// Load a session's last saved selection.
pub async fn load_selection(
    store: &dyn SessionStore,
    session_id: &SessionId,
) -> StoreResult<SessionSnapshot> {
    store.load_snapshot(session_id).await
}

/// Drop a session's snapshot.
pub async fn clear_selection(store: &dyn SessionStore, session_id: &SessionId) -> StoreResult<()> {
    store.delete_snapshot(session_id).await?;
    log::info!("cleared selection for session {}", session_id);
    Ok(())
}

/// List known sessions, most recently updated first.
pub async fn list_sessions(store: &dyn SessionStore) -> StoreResult<Vec<SessionInfo>> {
    store.list_sessions().await
}

/// Whether the store backend is reachable.
pub async fn health_check(store: &dyn SessionStore) -> StoreResult<bool> {
    store.health_check().await
}
