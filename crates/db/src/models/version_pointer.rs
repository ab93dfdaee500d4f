//! Undo/redo pointer row for a document.

use lexdraft_core::pointer::PointerState;
use lexdraft_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `version_pointers` table. One per document, created
/// lazily on the first pointer write.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VersionPointer {
    pub id: DbId,
    pub document_id: DbId,
    pub head_version: i64,
    pub current_version: i64,
    pub max_reachable_version: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl VersionPointer {
    /// The pure pointer triple, detached from row identity.
    pub fn state(&self) -> PointerState {
        PointerState {
            head: self.head_version,
            current: self.current_version,
            max_reachable: self.max_reachable_version,
        }
    }
}
