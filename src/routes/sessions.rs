//! Session endpoint data types.

use crate::api::SessionId;
use serde::{Deserialize, Serialize};

/// Session listing entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfo {
    pub session_id: SessionId,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

pub const LIST_SESSIONS: &str = "list_sessions";
pub const PUT_SESSION: &str = "save_selection";
pub const GET_SESSION: &str = "load_selection";
pub const DELETE_SESSION: &str = "clear_selection";
