//! Handlers for the `/sections` sub-resource.
//!
//! Sections are nested under documents:
//! `/documents/{document_id}/sections[/{id}]`
//!
//! Section mutations edit live state only and never record a version.
//! The editor snapshots explicitly via `POST /documents/{id}/versions`
//! after each save.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use lexdraft_core::document::validate_section_kind;
use lexdraft_core::error::CoreError;
use lexdraft_core::types::DbId;
use lexdraft_db::models::section::{NewSection, UpdateSection};
use lexdraft_db::repositories::{DocumentRepo, SectionRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/documents/{document_id}/sections
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(document_id): Path<DbId>,
    Json(input): Json<NewSection>,
) -> AppResult<impl IntoResponse> {
    validate_section_kind(&input.kind)?;

    DocumentRepo::find_by_id(&state.pool, document_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Document",
            id: document_id,
        }))?;

    let section = SectionRepo::create(&state.pool, document_id, &input).await?;

    tracing::debug!(
        user_id = auth.user_id,
        document_id,
        section_id = section.id,
        "section created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: section })))
}

/// PUT /api/v1/documents/{document_id}/sections/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((document_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateSection>,
) -> AppResult<impl IntoResponse> {
    if let Some(kind) = &input.kind {
        validate_section_kind(kind)?;
    }

    let section = SectionRepo::update(&state.pool, document_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Section",
            id,
        }))?;

    tracing::debug!(
        user_id = auth.user_id,
        document_id,
        section_id = id,
        "section updated"
    );
    Ok(Json(DataResponse { data: section }))
}

/// DELETE /api/v1/documents/{document_id}/sections/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((document_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = SectionRepo::delete(&state.pool, document_id, id).await?;
    if deleted {
        tracing::debug!(
            user_id = auth.user_id,
            document_id,
            section_id = id,
            "section deleted"
        );
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Section",
            id,
        }))
    }
}
