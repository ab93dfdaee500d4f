//! Repository for the `documents` table.

use lexdraft_core::types::DbId;
use sqlx::PgPool;

use crate::models::document::{Document, UpdateDocument};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, case_info, created_by, created_at, updated_at";

/// Provides CRUD and row-locking operations for documents.
pub struct DocumentRepo;

impl DocumentRepo {
    /// Insert a new document.
    pub async fn create(
        pool: &PgPool,
        created_by: DbId,
        title: &str,
        case_info: Option<&serde_json::Value>,
    ) -> Result<Document, sqlx::Error> {
        let query = format!(
            "INSERT INTO documents (title, case_info, created_by)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(title)
            .bind(case_info)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a document by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Document>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM documents WHERE id = $1");
        sqlx::query_as::<_, Document>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List documents, most recently updated first.
    pub async fn list(pool: &PgPool, limit: i64) -> Result<Vec<Document>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM documents
             ORDER BY updated_at DESC, id DESC
             LIMIT $1"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Update a document's metadata. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDocument,
    ) -> Result<Option<Document>, sqlx::Error> {
        let query = format!(
            "UPDATE documents SET
                title = COALESCE($2, title),
                case_info = COALESCE($3, case_info),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.case_info)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a document by ID. Returns `true` if a row was removed.
    ///
    /// Cascades to sections, versions, and the pointer row.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM documents WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // ── Transactional helpers ────────────────────────────────────────

    /// Lock the document row with `FOR UPDATE` and return it.
    ///
    /// Serializes every history operation on the same document: the lock is
    /// held until the enclosing transaction commits or rolls back.
    pub async fn lock_in_tx(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        id: DbId,
    ) -> Result<Option<Document>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM documents WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Document>(&query)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Overwrite title and case metadata within an open transaction.
    ///
    /// Unlike [`DocumentRepo::update`] this applies both fields verbatim,
    /// including clearing `case_info` to NULL. Used when replaying a snapshot.
    pub async fn set_meta_in_tx(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        id: DbId,
        title: &str,
        case_info: Option<&serde_json::Value>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE documents SET title = $2, case_info = $3, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(title)
        .bind(case_info)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }
}
