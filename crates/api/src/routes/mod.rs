pub mod document;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /documents                                   GET list, POST create
/// /documents/{id}                              GET detail, PUT update, DELETE delete
/// /documents/{id}/sections                     POST create
/// /documents/{id}/sections/{section_id}        PUT update, DELETE delete
/// /documents/{id}/versions                     GET list, POST create
/// /documents/{id}/versions/status              GET pointer status
/// /documents/{id}/versions/{version_number}    GET detail, POST restore
/// /documents/{id}/undo                         POST undo
/// /documents/{id}/redo                         POST redo
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/documents", document::router())
}
