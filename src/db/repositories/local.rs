//! In-memory session store.

use crate::api::{SessionId, SessionInfo};
use crate::db::models::SessionSnapshot;
use crate::db::repository::{ErrorContext, SessionStore, StoreError, StoreResult};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Session store backed by a process-local map.
///
/// Suitable for development and tests; snapshots do not survive a restart.
#[derive(Default)]
pub struct LocalStore {
    sessions: RwLock<HashMap<String, SessionSnapshot>>,
}

impl LocalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions.
    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }
}

#[async_trait]
impl SessionStore for LocalStore {
    async fn save_snapshot(&self, snapshot: &SessionSnapshot) -> StoreResult<()> {
        let mut sessions = self.sessions.write();

        // The service layer stamps checksums; identical content means the
        // frontend re-saved an unchanged selection and the write is a no-op.
        if let Some(existing) = sessions.get(snapshot.session_id.as_str()) {
            if existing.checksum == snapshot.checksum {
                log::debug!(
                    "unchanged snapshot for session {}, skipping write",
                    snapshot.session_id
                );
                return Ok(());
            }
        }

        sessions.insert(snapshot.session_id.as_str().to_string(), snapshot.clone());
        Ok(())
    }

    async fn load_snapshot(&self, session_id: &SessionId) -> StoreResult<SessionSnapshot> {
        self.sessions
            .read()
            .get(session_id.as_str())
            .cloned()
            .ok_or_else(|| {
                StoreError::not_found_with_context(
                    format!("no snapshot for session {}", session_id),
                    ErrorContext::new("load_snapshot").with_session(session_id),
                )
            })
    }

    async fn delete_snapshot(&self, session_id: &SessionId) -> StoreResult<()> {
        self.sessions.write().remove(session_id.as_str());
        Ok(())
    }

    async fn list_sessions(&self) -> StoreResult<Vec<SessionInfo>> {
        let mut infos: Vec<SessionInfo> = self
            .sessions
            .read()
            .values()
            .map(|snapshot| SessionInfo {
                session_id: snapshot.session_id.clone(),
                updated_at: snapshot.updated_at,
            })
            .collect();

        infos.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(infos)
    }

    async fn health_check(&self) -> StoreResult<bool> {
        Ok(true)
    }
}
