//! Route definitions for documents and their scoped sub-resources.
//!
//! Sections and version history are mounted under a specific document so
//! every operation is scoped by `document_id` in the path.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{document, section, version};
use crate::state::AppState;

/// Routes mounted at `/documents`.
///
/// ```text
/// GET    /                                   list
/// POST   /                                   create
/// GET    /{id}                               get_by_id
/// PUT    /{id}                               update
/// DELETE /{id}                               delete
///
/// POST   /{document_id}/sections             create
/// PUT    /{document_id}/sections/{id}        update
/// DELETE /{document_id}/sections/{id}        delete
///
/// GET    /{document_id}/versions             list
/// POST   /{document_id}/versions             create
/// GET    /{document_id}/versions/status      status
/// GET    /{document_id}/versions/{version}   get_by_version
/// POST   /{document_id}/versions/{version}   restore
/// POST   /{document_id}/undo                 undo
/// POST   /{document_id}/redo                 redo
/// ```
pub fn router() -> Router<AppState> {
    let section_routes = Router::new().route("/", post(section::create)).route(
        "/{id}",
        put(section::update).delete(section::delete),
    );

    let version_routes = Router::new()
        .route("/", get(version::list).post(version::create))
        .route("/status", get(version::status))
        .route(
            "/{version_number}",
            get(version::get_by_version).post(version::restore),
        );

    Router::new()
        .route("/", get(document::list).post(document::create))
        .route(
            "/{id}",
            get(document::get_by_id)
                .put(document::update)
                .delete(document::delete),
        )
        .nest("/{document_id}/sections", section_routes)
        .nest("/{document_id}/versions", version_routes)
        .route("/{document_id}/undo", post(version::undo))
        .route("/{document_id}/redo", post(version::redo))
}
