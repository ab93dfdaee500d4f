pub mod document;
pub mod section;
pub mod version;

use serde::Deserialize;

/// Default page size for list endpoints.
pub(crate) const DEFAULT_LIMIT: i64 = 50;
/// Hard cap on client-requested page sizes.
pub(crate) const MAX_LIMIT: i64 = 100;

/// Query parameters shared by list endpoints.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Maximum number of rows to return.
    pub limit: Option<i64>,
}
