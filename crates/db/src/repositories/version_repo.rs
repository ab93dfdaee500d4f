//! Repository for the `document_versions` table.
//!
//! Version rows are immutable snapshots. This repository only ever inserts
//! and reads them; there is deliberately no update or delete.

use lexdraft_core::change::ChangeType;
use lexdraft_core::types::DbId;
use sqlx::PgPool;

use crate::models::document_version::{DocumentVersion, VersionSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, document_id, version_number, author_id, change_type, \
    change_summary, section_id, snapshot, created_at, updated_at";

/// Column list for snapshot-free listing queries.
const SUMMARY_COLUMNS: &str =
    "id, version_number, author_id, change_type, change_summary, section_id, created_at";

/// Provides append and read operations for document versions.
pub struct VersionRepo;

impl VersionRepo {
    /// Append a new version, auto-assigning the next version number.
    ///
    /// The number is allocated inside the INSERT so it is always the current
    /// head plus one at the moment the row is written, even when the caller
    /// read an older head before entering the transaction.
    pub async fn append_in_tx(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        document_id: DbId,
        author_id: DbId,
        change_type: ChangeType,
        change_summary: Option<&str>,
        section_id: Option<DbId>,
        snapshot: &serde_json::Value,
    ) -> Result<DocumentVersion, sqlx::Error> {
        let query = format!(
            "INSERT INTO document_versions
                (document_id, version_number, author_id, change_type, change_summary, section_id, snapshot)
             VALUES (
                $1,
                (SELECT COALESCE(MAX(version_number), 0) + 1 FROM document_versions WHERE document_id = $1),
                $2, $3, $4, $5, $6
             )
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DocumentVersion>(&query)
            .bind(document_id)
            .bind(author_id)
            .bind(change_type.as_str())
            .bind(change_summary)
            .bind(section_id)
            .bind(snapshot)
            .fetch_one(&mut **tx)
            .await
    }

    /// Find a specific version of a document.
    pub async fn find_by_version(
        pool: &PgPool,
        document_id: DbId,
        version: i64,
    ) -> Result<Option<DocumentVersion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM document_versions
             WHERE document_id = $1 AND version_number = $2"
        );
        sqlx::query_as::<_, DocumentVersion>(&query)
            .bind(document_id)
            .bind(version)
            .fetch_optional(pool)
            .await
    }

    /// Find a specific version within an open transaction.
    pub async fn find_by_version_in_tx(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        document_id: DbId,
        version: i64,
    ) -> Result<Option<DocumentVersion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM document_versions
             WHERE document_id = $1 AND version_number = $2"
        );
        sqlx::query_as::<_, DocumentVersion>(&query)
            .bind(document_id)
            .bind(version)
            .fetch_optional(&mut **tx)
            .await
    }

    /// List versions for a document without snapshot payloads, newest first.
    pub async fn list_by_document(
        pool: &PgPool,
        document_id: DbId,
        limit: i64,
    ) -> Result<Vec<VersionSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM document_versions
             WHERE document_id = $1
             ORDER BY version_number DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, VersionSummary>(&query)
            .bind(document_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Get the highest version number for a document (0 if none exist).
    pub async fn current_head(pool: &PgPool, document_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as(
            "SELECT COALESCE(MAX(version_number), 0) FROM document_versions WHERE document_id = $1",
        )
        .bind(document_id)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// Get the highest version number within an open transaction.
    pub async fn current_head_in_tx(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        document_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as(
            "SELECT COALESCE(MAX(version_number), 0) FROM document_versions WHERE document_id = $1",
        )
        .bind(document_id)
        .fetch_one(&mut **tx)
        .await?;
        Ok(row.0)
    }
}
