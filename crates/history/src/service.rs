//! The undo/redo state machine over the version log.

use lexdraft_core::change::ChangeType;
use lexdraft_core::pointer::{PointerState, VersionStatus};
use lexdraft_core::snapshot::DocumentSnapshot;
use lexdraft_core::types::DbId;
use lexdraft_db::models::document_version::{DocumentVersion, VersionSummary};
use lexdraft_db::repositories::{DocumentRepo, PointerRepo, SectionRepo, VersionRepo};
use serde::Serialize;
use sqlx::PgPool;

use crate::error::HistoryError;
use crate::{restore, snapshot};

/// Result of an undo or redo: the version now live, its content, and the
/// refreshed flags for the editor's controls.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedVersion {
    pub version_number: i64,
    pub snapshot: DocumentSnapshot,
    pub status: VersionStatus,
}

/// A page of version summaries plus the pointer position, for the
/// version-history panel.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionLog {
    pub versions: Vec<VersionSummary>,
    pub current_version: i64,
}

/// The version control engine for documents.
///
/// Every mutating operation runs in one transaction that first locks the
/// document row with `FOR UPDATE`. That serializes concurrent callers on the
/// same document (an auto-save racing an undo, two saves racing each other)
/// while operations on different documents never contend. Version-number
/// allocation happens inside the version INSERT itself, so a failed
/// operation leaves no number allocated and the caller may simply retry.
pub struct DocumentHistory;

impl DocumentHistory {
    /// Record the current live state as a new version.
    ///
    /// The new version always lands at head + 1, wherever the pointer sits.
    /// If the caller had undone first, the versions between the pointer and
    /// the old head become unreachable via redo but stay stored.
    pub async fn create_version(
        pool: &PgPool,
        document_id: DbId,
        author_id: DbId,
        change_type: ChangeType,
        change_summary: Option<&str>,
        section_id: Option<DbId>,
    ) -> Result<DocumentVersion, HistoryError> {
        let mut tx = pool.begin().await?;

        let document = DocumentRepo::lock_in_tx(&mut tx, document_id)
            .await?
            .ok_or(HistoryError::DocumentNotFound(document_id))?;
        let sections = SectionRepo::list_in_tx(&mut tx, document_id).await?;

        let captured = snapshot::capture(&document, &sections);
        let payload = snapshot::encode(document_id, &captured)?;

        let version = VersionRepo::append_in_tx(
            &mut tx,
            document_id,
            author_id,
            change_type,
            change_summary,
            section_id,
            &payload,
        )
        .await?;

        let state = PointerState::at_head(version.version_number);
        PointerRepo::upsert_in_tx(&mut tx, document_id, state).await?;

        tx.commit().await?;
        tracing::debug!(
            document_id,
            version = version.version_number,
            change_type = %version.change_type,
            "created document version"
        );
        Ok(version)
    }

    /// Move the live content one version back.
    ///
    /// Pure pointer movement: no version row is written and the redo horizon
    /// is untouched, so a following redo lands exactly where this started.
    pub async fn undo(pool: &PgPool, document_id: DbId) -> Result<AppliedVersion, HistoryError> {
        let mut tx = pool.begin().await?;

        DocumentRepo::lock_in_tx(&mut tx, document_id)
            .await?
            .ok_or(HistoryError::DocumentNotFound(document_id))?;

        let state = Self::load_state_in_tx(&mut tx, document_id).await?;
        let stepped = state
            .step_back()
            .ok_or(HistoryError::NothingToUndo(document_id))?;

        let applied = Self::apply_pointer_move(&mut tx, document_id, stepped).await?;
        tx.commit().await?;

        tracing::debug!(document_id, version = applied.version_number, "undo applied");
        Ok(applied)
    }

    /// Move the live content one version forward along the redo horizon.
    pub async fn redo(pool: &PgPool, document_id: DbId) -> Result<AppliedVersion, HistoryError> {
        let mut tx = pool.begin().await?;

        DocumentRepo::lock_in_tx(&mut tx, document_id)
            .await?
            .ok_or(HistoryError::DocumentNotFound(document_id))?;

        let state = Self::load_state_in_tx(&mut tx, document_id).await?;
        let stepped = state
            .step_forward()
            .ok_or(HistoryError::NothingToRedo(document_id))?;

        let applied = Self::apply_pointer_move(&mut tx, document_id, stepped).await?;
        tx.commit().await?;

        tracing::debug!(document_id, version = applied.version_number, "redo applied");
        Ok(applied)
    }

    /// Restore the document to `version` by appending a new version carrying
    /// that snapshot.
    ///
    /// Never rewinds history: restoring to 3 while head is 10 writes version
    /// 11 with version 3's payload, and versions 4 through 10 stay
    /// queryable. The stored payload is copied verbatim into the new row.
    pub async fn restore_to_version(
        pool: &PgPool,
        document_id: DbId,
        version: i64,
        author_id: DbId,
    ) -> Result<DocumentVersion, HistoryError> {
        let mut tx = pool.begin().await?;

        DocumentRepo::lock_in_tx(&mut tx, document_id)
            .await?
            .ok_or(HistoryError::DocumentNotFound(document_id))?;

        let head = VersionRepo::current_head_in_tx(&mut tx, document_id).await?;
        if head == 0 {
            return Err(HistoryError::NoHistory(document_id));
        }

        let target = VersionRepo::find_by_version_in_tx(&mut tx, document_id, version)
            .await?
            .ok_or(HistoryError::VersionNotFound {
                document_id,
                version,
            })?;
        let decoded = snapshot::decode(document_id, &target.snapshot)?;

        restore::apply_snapshot(&mut tx, document_id, &decoded).await?;

        let summary = format!("Restored from version {version}");
        let new_version = VersionRepo::append_in_tx(
            &mut tx,
            document_id,
            author_id,
            ChangeType::Restore,
            Some(&summary),
            None,
            &target.snapshot,
        )
        .await?;

        let state = PointerState::at_head(new_version.version_number);
        PointerRepo::upsert_in_tx(&mut tx, document_id, state).await?;

        tx.commit().await?;
        tracing::debug!(
            document_id,
            from = version,
            version = new_version.version_number,
            "restored document version"
        );
        Ok(new_version)
    }

    /// Pointer status for the editor's undo/redo controls.
    pub async fn status(pool: &PgPool, document_id: DbId) -> Result<VersionStatus, HistoryError> {
        let state = Self::load_state(pool, document_id).await?;
        Ok(state.status())
    }

    /// List version summaries newest first, plus where the pointer sits.
    pub async fn list_versions(
        pool: &PgPool,
        document_id: DbId,
        limit: i64,
    ) -> Result<VersionLog, HistoryError> {
        let state = Self::load_state(pool, document_id).await?;
        let versions = VersionRepo::list_by_document(pool, document_id, limit).await?;
        Ok(VersionLog {
            versions,
            current_version: state.current,
        })
    }

    /// Fetch one stored version with its snapshot payload.
    pub async fn get_version(
        pool: &PgPool,
        document_id: DbId,
        version: i64,
    ) -> Result<DocumentVersion, HistoryError> {
        DocumentRepo::find_by_id(pool, document_id)
            .await?
            .ok_or(HistoryError::DocumentNotFound(document_id))?;
        VersionRepo::find_by_version(pool, document_id, version)
            .await?
            .ok_or(HistoryError::VersionNotFound {
                document_id,
                version,
            })
    }

    // ── Internals ────────────────────────────────────────────────────

    /// Load the pointer triple inside the critical section.
    ///
    /// The caller has already locked the document row. Fails with
    /// [`HistoryError::NoHistory`] when the document has no versions at all.
    /// A document with history but no pointer row is treated as sitting on
    /// version 1.
    async fn load_state_in_tx(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        document_id: DbId,
    ) -> Result<PointerState, HistoryError> {
        let head = VersionRepo::current_head_in_tx(tx, document_id).await?;
        if head == 0 {
            return Err(HistoryError::NoHistory(document_id));
        }
        let state = PointerRepo::find_by_document_in_tx(tx, document_id)
            .await?
            .map(|row| row.state())
            .unwrap_or_else(PointerState::initial);
        Self::verify_consistent(document_id, state)
    }

    /// Read-only variant of [`Self::load_state_in_tx`] for status and
    /// listing, including the document-exists check.
    async fn load_state(pool: &PgPool, document_id: DbId) -> Result<PointerState, HistoryError> {
        DocumentRepo::find_by_id(pool, document_id)
            .await?
            .ok_or(HistoryError::DocumentNotFound(document_id))?;
        let head = VersionRepo::current_head(pool, document_id).await?;
        if head == 0 {
            return Err(HistoryError::NoHistory(document_id));
        }
        let state = PointerRepo::find_by_document(pool, document_id)
            .await?
            .map(|row| row.state())
            .unwrap_or_else(PointerState::initial);
        Self::verify_consistent(document_id, state)
    }

    /// Reject a loaded triple that violates its ordering invariant.
    ///
    /// Never repaired here: a corrupt triple means a bug or out-of-band
    /// write, and overwriting it would destroy the evidence.
    fn verify_consistent(
        document_id: DbId,
        state: PointerState,
    ) -> Result<PointerState, HistoryError> {
        if !state.is_consistent() {
            return Err(HistoryError::CorruptPointers {
                document_id,
                head: state.head,
                current: state.current,
                max_reachable: state.max_reachable,
            });
        }
        Ok(state)
    }

    /// Restore the snapshot at `state.current` and persist the new triple.
    async fn apply_pointer_move(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        document_id: DbId,
        state: PointerState,
    ) -> Result<AppliedVersion, HistoryError> {
        let target = state.current;
        let version = VersionRepo::find_by_version_in_tx(tx, document_id, target)
            .await?
            .ok_or(HistoryError::VersionNotFound {
                document_id,
                version: target,
            })?;
        let decoded = snapshot::decode(document_id, &version.snapshot)?;

        restore::apply_snapshot(tx, document_id, &decoded).await?;
        PointerRepo::upsert_in_tx(tx, document_id, state).await?;

        Ok(AppliedVersion {
            version_number: target,
            snapshot: decoded,
            status: state.status(),
        })
    }
}
