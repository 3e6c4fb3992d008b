//! SchoolRepository port
//!
//! Persists the whole school as one document. The repository only moves
//! snapshots; linking and reconciliation happen in the domain.

use crate::domain::entities::SchoolSnapshot;
use std::path::PathBuf;

pub trait SchoolRepository: Send + Sync {
    /// Read the stored snapshot. A store that does not exist yet is empty.
    fn load(&self) -> Result<SchoolSnapshot, StoreError>;
    /// Replace the stored snapshot.
    fn save(&self, snapshot: &SchoolSnapshot) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Failed to access store: {message}")]
    AccessError { message: String },

    #[error("Failed to serialize store: {message}")]
    SerializationError { message: String },

    #[error(
        "store file corrupted: {path}\n  → Fix: Restore it from a backup, or move it aside to start empty\n  → Run: registrar --data {path} check\n  → Details: {message}"
    )]
    Corrupted { path: PathBuf, message: String },
}
