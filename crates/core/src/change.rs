//! The closed set of change types a document version can record.
//!
//! Stored as text in the database but represented as an enum everywhere in
//! code so that new change kinds force the compiler to point at every match
//! that needs updating.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Why a version was recorded.
///
/// `Restore` versions are only ever minted by the restore operation itself;
/// the generic create-version surface rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    /// Initial version written when the document is created.
    Create,
    /// A manual edit to one or more sections or to document metadata.
    Update,
    /// A section was removed.
    Delete,
    /// Snapshot written by restoring an earlier version.
    Restore,
    /// Section content produced by the generation pipeline.
    Generate,
}

impl ChangeType {
    /// The database/text representation (lowercase).
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeType::Create => "create",
            ChangeType::Update => "update",
            ChangeType::Delete => "delete",
            ChangeType::Restore => "restore",
            ChangeType::Generate => "generate",
        }
    }
}

impl std::fmt::Display for ChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for ChangeType {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "create" => Ok(ChangeType::Create),
            "update" => Ok(ChangeType::Update),
            "delete" => Ok(ChangeType::Delete),
            "restore" => Ok(ChangeType::Restore),
            "generate" => Ok(ChangeType::Generate),
            other => Err(CoreError::Validation(format!(
                "Unknown change type '{other}'. Must be one of: create, update, delete, restore, generate"
            ))),
        }
    }
}
