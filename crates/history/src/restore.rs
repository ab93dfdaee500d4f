//! Writing a stored snapshot back onto the live document tables.

use lexdraft_core::snapshot::DocumentSnapshot;
use lexdraft_core::types::DbId;
use lexdraft_db::repositories::{DocumentRepo, SectionRepo};

/// Overwrite the live document state with `snapshot`, inside the caller's
/// transaction.
///
/// The only place live state is ever rewritten from history. Sections are
/// upserted by id, so one deleted after the snapshot was taken comes back
/// under its original id; live sections absent from the snapshot are then
/// removed. Document title and case metadata are applied verbatim.
pub async fn apply_snapshot(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    document_id: DbId,
    snapshot: &DocumentSnapshot,
) -> Result<(), sqlx::Error> {
    DocumentRepo::set_meta_in_tx(tx, document_id, &snapshot.title, snapshot.case_info.as_ref())
        .await?;

    for section in &snapshot.sections {
        SectionRepo::upsert_snapshot_in_tx(tx, document_id, section).await?;
    }

    let keep = snapshot.section_ids();
    SectionRepo::delete_absent_in_tx(tx, document_id, &keep).await?;

    Ok(())
}
