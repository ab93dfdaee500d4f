//! Capturing live document state into storable snapshot payloads.

use lexdraft_core::snapshot::{DocumentSnapshot, SectionSnapshot};
use lexdraft_core::types::DbId;
use lexdraft_db::models::document::Document;
use lexdraft_db::models::section::Section;

use crate::error::HistoryError;

/// Capture the live state of a document into a snapshot.
///
/// Pure: clones everything it touches, so later edits to the live rows can
/// never leak into a stored snapshot. `sections` must already be in reading
/// order; the capture preserves it.
pub fn capture(document: &Document, sections: &[Section]) -> DocumentSnapshot {
    DocumentSnapshot {
        title: document.title.clone(),
        case_info: document.case_info.clone(),
        sections: sections
            .iter()
            .map(|s| SectionSnapshot {
                id: s.id,
                kind: s.kind.clone(),
                title: s.title.clone(),
                content: s.content.clone(),
                position: s.position,
                is_generated: s.is_generated,
            })
            .collect(),
    }
}

/// Serialize a snapshot for storage in the version log.
pub fn encode(
    document_id: DbId,
    snapshot: &DocumentSnapshot,
) -> Result<serde_json::Value, HistoryError> {
    serde_json::to_value(snapshot)
        .map_err(|source| HistoryError::InvalidSnapshot {
            document_id,
            source,
        })
}

/// Deserialize a stored snapshot payload.
///
/// A payload that fails to decode was written by an incompatible schema or
/// tampered with; surfaced as [`HistoryError::InvalidSnapshot`] so the
/// caller can refuse to restore from it.
pub fn decode(
    document_id: DbId,
    value: &serde_json::Value,
) -> Result<DocumentSnapshot, HistoryError> {
    serde_json::from_value(value.clone())
        .map_err(|source| HistoryError::InvalidSnapshot {
            document_id,
            source,
        })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
