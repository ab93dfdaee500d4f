//! Validation rules for documents and their sections.

use crate::error::CoreError;

/// Maximum length of a document title.
pub const MAX_TITLE_LEN: usize = 300;

/// Maximum length of a section kind label.
pub const MAX_SECTION_KIND_LEN: usize = 100;

/// Maximum length of a version change summary.
pub const MAX_CHANGE_SUMMARY_LEN: usize = 500;

/// Validate a document title: non-blank, bounded length.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Title must not be empty".into()));
    }
    if title.len() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "Title must be at most {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a section kind label (e.g. `introduction`, `facts`, `damages`).
///
/// Kinds are free-form because firms customize their letter structure, but
/// blank or oversized labels are still rejected.
pub fn validate_section_kind(kind: &str) -> Result<(), CoreError> {
    if kind.trim().is_empty() {
        return Err(CoreError::Validation(
            "Section kind must not be empty".into(),
        ));
    }
    if kind.len() > MAX_SECTION_KIND_LEN {
        return Err(CoreError::Validation(format!(
            "Section kind must be at most {MAX_SECTION_KIND_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate an optional change summary attached to a version.
pub fn validate_change_summary(summary: &str) -> Result<(), CoreError> {
    if summary.len() > MAX_CHANGE_SUMMARY_LEN {
        return Err(CoreError::Validation(format!(
            "Change summary must be at most {MAX_CHANGE_SUMMARY_LEN} characters"
        )));
    }
    Ok(())
}
