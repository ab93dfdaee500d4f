//! Document version entity model and wire-facing summary types.

use lexdraft_core::change::ChangeType;
use lexdraft_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `document_versions` table.
///
/// Immutable once inserted: no repository method updates or deletes these
/// rows, including for versions orphaned by branch discard.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DocumentVersion {
    pub id: DbId,
    pub document_id: DbId,
    pub version_number: i64,
    pub author_id: DbId,
    #[sqlx(try_from = "String")]
    pub change_type: ChangeType,
    pub change_summary: Option<String>,
    /// Section the change was scoped to, when it was. Historical reference
    /// only -- the section may no longer exist live.
    pub section_id: Option<DbId>,
    pub snapshot: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Version list entry without the snapshot payload.
///
/// camelCase keys: this shape is part of the HTTP contract with the editor's
/// version-history panel.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionSummary {
    pub id: DbId,
    pub version_number: i64,
    pub author_id: DbId,
    #[sqlx(try_from = "String")]
    pub change_type: ChangeType,
    pub change_summary: Option<String>,
    pub section_id: Option<DbId>,
    pub created_at: Timestamp,
}

impl From<DocumentVersion> for VersionSummary {
    fn from(v: DocumentVersion) -> Self {
        VersionSummary {
            id: v.id,
            version_number: v.version_number,
            author_id: v.author_id,
            change_type: v.change_type,
            change_summary: v.change_summary,
            section_id: v.section_id,
            created_at: v.created_at,
        }
    }
}

/// Full single-version response including the snapshot payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionDetail {
    pub id: DbId,
    pub version_number: i64,
    pub author_id: DbId,
    pub change_type: ChangeType,
    pub change_summary: Option<String>,
    pub section_id: Option<DbId>,
    pub snapshot: serde_json::Value,
    pub created_at: Timestamp,
}

impl From<DocumentVersion> for VersionDetail {
    fn from(v: DocumentVersion) -> Self {
        VersionDetail {
            id: v.id,
            version_number: v.version_number,
            author_id: v.author_id,
            change_type: v.change_type,
            change_summary: v.change_summary,
            section_id: v.section_id,
            snapshot: v.snapshot,
            created_at: v.created_at,
        }
    }
}
