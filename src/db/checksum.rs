//! Selection checksums for redundant-write suppression.

use crate::db::models::RouteSelection;
use sha2::{Digest, Sha256};

/// Checksum of a route selection's canonical JSON form.
///
/// The frontend saves on every field change; identical consecutive saves are
/// detected by this value and skipped by the store service layer.
pub fn snapshot_checksum(selection: &RouteSelection) -> String {
    let canonical =
        serde_json::to_string(selection).expect("route selection serializes to JSON");
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    hex::encode(hasher.finalize())
}
