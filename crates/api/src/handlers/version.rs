//! Handlers for the version history of a document.
//!
//! All pointer and snapshot logic lives in
//! [`lexdraft_history::service::DocumentHistory`]; these handlers only
//! translate between the wire contract and the engine. Version endpoints
//! speak camelCase JSON because the editor frontend depends on the exact
//! key shape.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use lexdraft_core::change::ChangeType;
use lexdraft_core::document::validate_change_summary;
use lexdraft_core::error::CoreError;
use lexdraft_core::types::DbId;
use lexdraft_db::models::document_version::{VersionDetail, VersionSummary};
use lexdraft_history::service::DocumentHistory;
use serde::Deserialize;

use crate::error::AppResult;
use crate::handlers::{ListQuery, DEFAULT_LIMIT, MAX_LIMIT};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Body of `POST /documents/{id}/versions`.
///
/// `changeType` deserializes into the closed [`ChangeType`] enum, so unknown
/// values are rejected before the handler runs.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVersionRequest {
    pub change_type: ChangeType,
    #[serde(default)]
    pub change_summary: Option<String>,
    #[serde(default)]
    pub section_id: Option<DbId>,
}

/// GET /api/v1/documents/{id}/versions
///
/// Version summaries newest first, plus the pointer position.
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(document_id): Path<DbId>,
    Query(query): Query<ListQuery>,
) -> AppResult<impl IntoResponse> {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let log = DocumentHistory::list_versions(&state.pool, document_id, limit).await?;
    Ok(Json(DataResponse { data: log }))
}

/// POST /api/v1/documents/{id}/versions
///
/// Records the current live state as a new version at head + 1.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(document_id): Path<DbId>,
    Json(input): Json<CreateVersionRequest>,
) -> AppResult<impl IntoResponse> {
    if input.change_type == ChangeType::Restore {
        return Err(CoreError::Validation(
            "changeType 'restore' is reserved for the restore endpoint".into(),
        )
        .into());
    }
    if let Some(summary) = &input.change_summary {
        validate_change_summary(summary)?;
    }

    let version = DocumentHistory::create_version(
        &state.pool,
        document_id,
        auth.user_id,
        input.change_type,
        input.change_summary.as_deref(),
        input.section_id,
    )
    .await?;

    tracing::debug!(
        user_id = auth.user_id,
        document_id,
        version = version.version_number,
        "version recorded"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: VersionSummary::from(version),
        }),
    ))
}

/// GET /api/v1/documents/{id}/versions/status
///
/// Pointer position and undo/redo availability for the editor's controls.
pub async fn status(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(document_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let status = DocumentHistory::status(&state.pool, document_id).await?;
    Ok(Json(DataResponse { data: status }))
}

/// GET /api/v1/documents/{id}/versions/{version_number}
///
/// Full version including the snapshot payload, for history panel previews.
pub async fn get_by_version(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path((document_id, version_number)): Path<(DbId, i64)>,
) -> AppResult<impl IntoResponse> {
    let version = DocumentHistory::get_version(&state.pool, document_id, version_number).await?;
    Ok(Json(DataResponse {
        data: VersionDetail::from(version),
    }))
}

/// POST /api/v1/documents/{id}/versions/{version_number}
///
/// Rewrites live state from the stored snapshot and appends a `restore`
/// version; history is never rewound.
pub async fn restore(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((document_id, version_number)): Path<(DbId, i64)>,
) -> AppResult<impl IntoResponse> {
    let version =
        DocumentHistory::restore_to_version(&state.pool, document_id, version_number, auth.user_id)
            .await?;

    tracing::debug!(
        user_id = auth.user_id,
        document_id,
        from = version_number,
        version = version.version_number,
        "version restored"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: VersionSummary::from(version),
        }),
    ))
}

/// POST /api/v1/documents/{id}/undo
pub async fn undo(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(document_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let applied = DocumentHistory::undo(&state.pool, document_id).await?;

    tracing::debug!(
        user_id = auth.user_id,
        document_id,
        version = applied.version_number,
        "undo applied"
    );
    Ok(Json(DataResponse { data: applied }))
}

/// POST /api/v1/documents/{id}/redo
pub async fn redo(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(document_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let applied = DocumentHistory::redo(&state.pool, document_id).await?;

    tracing::debug!(
        user_id = auth.user_id,
        document_id,
        version = applied.version_number,
        "redo applied"
    );
    Ok(Json(DataResponse { data: applied }))
}
