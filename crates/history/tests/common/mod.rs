//! Shared fixtures for history engine tests.

use lexdraft_core::change::ChangeType;
use lexdraft_db::models::document::Document;
use lexdraft_db::models::section::{NewSection, Section, UpdateSection};
use lexdraft_db::repositories::{DocumentRepo, SectionRepo};
use lexdraft_history::service::DocumentHistory;
use sqlx::PgPool;

pub const AUTHOR: i64 = 1;

/// Create a document with one section and record its initial version.
pub async fn seed_document(pool: &PgPool, title: &str) -> (Document, Section) {
    let document = DocumentRepo::create(pool, AUTHOR, title, None).await.unwrap();
    let section = SectionRepo::create(
        pool,
        document.id,
        &NewSection {
            kind: "facts".to_string(),
            title: None,
            content: "v1 content".to_string(),
            position: 0,
            is_generated: false,
        },
    )
    .await
    .unwrap();
    DocumentHistory::create_version(
        pool,
        document.id,
        AUTHOR,
        ChangeType::Create,
        Some("Initial version"),
        None,
    )
    .await
    .unwrap();
    (document, section)
}

/// Overwrite a section's content and record the edit as a new version.
/// Returns the new version number.
pub async fn edit_and_save(
    pool: &PgPool,
    document_id: i64,
    section_id: i64,
    content: &str,
) -> i64 {
    SectionRepo::update(
        pool,
        document_id,
        section_id,
        &UpdateSection {
            kind: None,
            title: None,
            content: Some(content.to_string()),
            position: None,
            is_generated: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    DocumentHistory::create_version(
        pool,
        document_id,
        AUTHOR,
        ChangeType::Update,
        None,
        Some(section_id),
    )
    .await
    .unwrap()
    .version_number
}

/// The live content of a section.
pub async fn live_content(pool: &PgPool, document_id: i64, section_id: i64) -> String {
    SectionRepo::find_by_document_and_id(pool, document_id, section_id)
        .await
        .unwrap()
        .unwrap()
        .content
}
