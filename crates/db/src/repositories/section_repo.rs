//! Repository for the `document_sections` table.

use lexdraft_core::snapshot::SectionSnapshot;
use lexdraft_core::types::DbId;
use sqlx::PgPool;

use crate::models::section::{NewSection, Section, UpdateSection};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, document_id, kind, title, content, position, is_generated, created_at, updated_at";

/// Provides CRUD and snapshot-replay operations for document sections.
pub struct SectionRepo;

impl SectionRepo {
    /// Insert a new section for a document.
    pub async fn create(
        pool: &PgPool,
        document_id: DbId,
        input: &NewSection,
    ) -> Result<Section, sqlx::Error> {
        let query = format!(
            "INSERT INTO document_sections (document_id, kind, title, content, position, is_generated)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Section>(&query)
            .bind(document_id)
            .bind(&input.kind)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.position)
            .bind(input.is_generated)
            .fetch_one(pool)
            .await
    }

    /// Find a section by ID, scoped to its document.
    pub async fn find_by_document_and_id(
        pool: &PgPool,
        document_id: DbId,
        id: DbId,
    ) -> Result<Option<Section>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM document_sections
             WHERE document_id = $1 AND id = $2"
        );
        sqlx::query_as::<_, Section>(&query)
            .bind(document_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all sections of a document in reading order.
    pub async fn list_by_document(
        pool: &PgPool,
        document_id: DbId,
    ) -> Result<Vec<Section>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM document_sections
             WHERE document_id = $1
             ORDER BY position ASC, id ASC"
        );
        sqlx::query_as::<_, Section>(&query)
            .bind(document_id)
            .fetch_all(pool)
            .await
    }

    /// Update a section. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if the section does not exist under the given document.
    pub async fn update(
        pool: &PgPool,
        document_id: DbId,
        id: DbId,
        input: &UpdateSection,
    ) -> Result<Option<Section>, sqlx::Error> {
        let query = format!(
            "UPDATE document_sections SET
                kind = COALESCE($3, kind),
                title = COALESCE($4, title),
                content = COALESCE($5, content),
                position = COALESCE($6, position),
                is_generated = COALESCE($7, is_generated),
                updated_at = NOW()
             WHERE document_id = $1 AND id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Section>(&query)
            .bind(document_id)
            .bind(id)
            .bind(&input.kind)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.position)
            .bind(input.is_generated)
            .fetch_optional(pool)
            .await
    }

    /// Delete a section by ID, scoped to its document.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, document_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM document_sections WHERE document_id = $1 AND id = $2")
            .bind(document_id)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // ── Transactional helpers ────────────────────────────────────────

    /// List sections within an open transaction.
    ///
    /// Used when capturing a snapshot so the read sees the same state the
    /// surrounding version insert commits against.
    pub async fn list_in_tx(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        document_id: DbId,
    ) -> Result<Vec<Section>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM document_sections
             WHERE document_id = $1
             ORDER BY position ASC, id ASC"
        );
        sqlx::query_as::<_, Section>(&query)
            .bind(document_id)
            .fetch_all(&mut **tx)
            .await
    }

    /// Write one snapshotted section back into the live table.
    ///
    /// Re-inserts under the snapshot's original ID when the section was
    /// deleted after the snapshot was taken. Safe against the ID sequence:
    /// every replayed ID was allocated by it, so it never hands the same
    /// value out again.
    pub async fn upsert_snapshot_in_tx(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        document_id: DbId,
        section: &SectionSnapshot,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO document_sections (id, document_id, kind, title, content, position, is_generated)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             ON CONFLICT (id) DO UPDATE SET
                kind = EXCLUDED.kind,
                title = EXCLUDED.title,
                content = EXCLUDED.content,
                position = EXCLUDED.position,
                is_generated = EXCLUDED.is_generated,
                updated_at = NOW()",
        )
        .bind(section.id)
        .bind(document_id)
        .bind(&section.kind)
        .bind(&section.title)
        .bind(&section.content)
        .bind(section.position)
        .bind(section.is_generated)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }

    /// Delete every section of the document whose ID is not in `keep_ids`.
    ///
    /// With an empty `keep_ids` this clears the document. Returns the number
    /// of rows removed.
    pub async fn delete_absent_in_tx(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        document_id: DbId,
        keep_ids: &[DbId],
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM document_sections WHERE document_id = $1 AND NOT (id = ANY($2))",
        )
        .bind(document_id)
        .bind(keep_ids)
        .execute(&mut **tx)
        .await?;
        Ok(result.rows_affected())
    }
}
