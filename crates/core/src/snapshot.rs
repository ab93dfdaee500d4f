//! Snapshot payload stored inside every document version.
//!
//! A snapshot is a full, owned copy of the document's restorable state at
//! one instant: title, case metadata, and the ordered sections. It is
//! serialized to JSONB on write and decoded again on undo/redo/restore, so
//! the shape here is a storage format -- change it only with a migration
//! story for existing rows.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// Full captured state of a document at one version.
///
/// `PartialEq` is derived so tests can assert that a stored snapshot is
/// returned byte-identical after round-tripping through the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    /// Document title at capture time.
    pub title: String,
    /// Case metadata (claimant, respondent, incident facts) as stored on
    /// the document row.
    pub case_info: Option<serde_json::Value>,
    /// Sections in display order.
    pub sections: Vec<SectionSnapshot>,
}

/// One section as captured inside a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSnapshot {
    /// The live section's id. Restoring re-inserts deleted sections under
    /// this id so later snapshots keep referring to the same row.
    pub id: DbId,
    pub kind: String,
    pub title: Option<String>,
    pub content: String,
    pub position: i32,
    pub is_generated: bool,
}

impl DocumentSnapshot {
    /// Ids of every section present in this snapshot.
    pub fn section_ids(&self) -> Vec<DbId> {
        self.sections.iter().map(|s| s.id).collect()
    }
}
