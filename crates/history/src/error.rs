//! Error taxonomy for history operations.

use lexdraft_core::types::DbId;
use thiserror::Error;

/// Errors surfaced by the version history engine.
///
/// Client-correctable conditions (missing rows, empty history, pointer at a
/// boundary) carry the document they apply to so the HTTP layer can report
/// them precisely. `CorruptPointers` is never recovered from automatically;
/// fixing the row is an operator action.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("document {0} not found")]
    DocumentNotFound(DbId),

    #[error("version {version} of document {document_id} not found")]
    VersionNotFound { document_id: DbId, version: i64 },

    #[error("document {0} has no version history")]
    NoHistory(DbId),

    #[error("nothing to undo for document {0}")]
    NothingToUndo(DbId),

    #[error("nothing to redo for document {0}")]
    NothingToRedo(DbId),

    #[error(
        "corrupt version pointers for document {document_id}: \
         head={head} current={current} max_reachable={max_reachable}"
    )]
    CorruptPointers {
        document_id: DbId,
        head: i64,
        current: i64,
        max_reachable: i64,
    },

    #[error("undecodable snapshot payload for document {document_id}")]
    InvalidSnapshot {
        document_id: DbId,
        #[source]
        source: serde_json::Error,
    },

    #[error("storage failure: {0}")]
    Storage(#[from] sqlx::Error),
}
