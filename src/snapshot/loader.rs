// src/snapshot/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::errors::Result;
use crate::snapshot::audit::audit_snapshot;
use crate::snapshot::model::{RawTask, Snapshot};

/// Read a snapshot file and return the raw store documents.
///
/// The file is a JSON export of the store's task collection: a top-level
/// array of task documents. This only performs deserialization; it does
/// **not** inspect the data for corruption. Use [`load_and_audit`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Vec<RawTask>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let docs: Vec<RawTask> = serde_json::from_str(&contents)?;

    Ok(docs)
}

/// Load a snapshot file, normalize it, and log advisory audit findings.
///
/// This is the recommended entry point for the host layers:
///
/// - Reads JSON.
/// - Applies document defaults (handled by `serde` + `Default` impls).
/// - Logs, but does not reject, corruption the engine tolerates:
///   - dependency ids referencing deleted tasks,
///   - self-dependencies and stored cycles,
///   - date-order violations, duplicate ids, empty titles.
///
/// Only an unreadable or undeserializable file is an error; a corrupted but
/// well-formed snapshot loads and every derivation degrades gracefully.
pub fn load_and_audit(path: impl AsRef<Path>) -> Result<Snapshot> {
    let docs = load_from_path(&path)?;
    let snapshot = Snapshot::from_raw(docs);

    for issue in audit_snapshot(&snapshot) {
        warn!(%issue, "snapshot audit finding");
    }

    debug!(tasks = snapshot.len(), "snapshot loaded");
    Ok(snapshot)
}

/// Helper to resolve a default snapshot path.
///
/// Currently this just returns `tasks.json` in the current working
/// directory; it exists so later revisions can respect an env var or look
/// in multiple locations.
pub fn default_snapshot_path() -> PathBuf {
    PathBuf::from("tasks.json")
}
