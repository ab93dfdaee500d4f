//! Document entity model and DTOs.

use lexdraft_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::section::NewSection;

/// A row from the `documents` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Document {
    pub id: DbId,
    pub title: String,
    /// Case metadata (claimant, respondent, incident facts); restorable.
    pub case_info: Option<serde_json::Value>,
    pub created_by: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new document, optionally with its initial sections.
#[derive(Debug, Deserialize)]
pub struct CreateDocument {
    pub title: String,
    pub case_info: Option<serde_json::Value>,
    #[serde(default)]
    pub sections: Vec<NewSection>,
}

/// DTO for updating document metadata.
#[derive(Debug, Deserialize)]
pub struct UpdateDocument {
    pub title: Option<String>,
    pub case_info: Option<serde_json::Value>,
}
