//! Letter section entity model and DTOs.

use lexdraft_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `document_sections` table -- live editing state.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Section {
    pub id: DbId,
    pub document_id: DbId,
    /// Letter-structure label, e.g. `introduction`, `facts`, `damages`.
    pub kind: String,
    pub title: Option<String>,
    pub content: String,
    pub position: i32,
    /// Set when the content came from the generation pipeline.
    pub is_generated: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a section. The owning document id comes from the
/// request path (or the enclosing create-document call), not the body.
#[derive(Debug, Deserialize)]
pub struct NewSection {
    pub kind: String,
    pub title: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub position: i32,
    #[serde(default)]
    pub is_generated: bool,
}

/// DTO for updating a section.
#[derive(Debug, Deserialize)]
pub struct UpdateSection {
    pub kind: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub position: Option<i32>,
    pub is_generated: Option<bool>,
}
