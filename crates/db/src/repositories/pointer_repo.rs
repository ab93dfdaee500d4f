//! Repository for the `version_pointers` table.

use lexdraft_core::pointer::PointerState;
use lexdraft_core::types::DbId;
use sqlx::PgPool;

use crate::models::version_pointer::VersionPointer;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, document_id, head_version, current_version, \
    max_reachable_version, created_at, updated_at";

/// Provides read and upsert operations for per-document undo/redo pointers.
pub struct PointerRepo;

impl PointerRepo {
    /// Find the pointer row for a document, if one has been written yet.
    pub async fn find_by_document(
        pool: &PgPool,
        document_id: DbId,
    ) -> Result<Option<VersionPointer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM version_pointers WHERE document_id = $1");
        sqlx::query_as::<_, VersionPointer>(&query)
            .bind(document_id)
            .fetch_optional(pool)
            .await
    }

    /// Find the pointer row within an open transaction.
    pub async fn find_by_document_in_tx(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        document_id: DbId,
    ) -> Result<Option<VersionPointer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM version_pointers WHERE document_id = $1");
        sqlx::query_as::<_, VersionPointer>(&query)
            .bind(document_id)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Write the pointer triple for a document, creating the row on first use.
    pub async fn upsert_in_tx(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        document_id: DbId,
        state: PointerState,
    ) -> Result<VersionPointer, sqlx::Error> {
        let query = format!(
            "INSERT INTO version_pointers
                (document_id, head_version, current_version, max_reachable_version)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (document_id) DO UPDATE SET
                head_version = EXCLUDED.head_version,
                current_version = EXCLUDED.current_version,
                max_reachable_version = EXCLUDED.max_reachable_version,
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VersionPointer>(&query)
            .bind(document_id)
            .bind(state.head)
            .bind(state.current)
            .bind(state.max_reachable)
            .fetch_one(&mut **tx)
            .await
    }
}
