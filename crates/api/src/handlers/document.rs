//! Handlers for the `/documents` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use lexdraft_core::change::ChangeType;
use lexdraft_core::document::{validate_section_kind, validate_title};
use lexdraft_core::error::CoreError;
use lexdraft_core::types::DbId;
use lexdraft_db::models::document::{CreateDocument, Document, UpdateDocument};
use lexdraft_db::models::section::Section;
use lexdraft_db::repositories::{DocumentRepo, SectionRepo};
use lexdraft_history::service::DocumentHistory;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::handlers::{ListQuery, DEFAULT_LIMIT, MAX_LIMIT};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// A document together with its sections in reading order.
#[derive(Debug, Serialize)]
pub struct DocumentDetail {
    #[serde(flatten)]
    pub document: Document,
    pub sections: Vec<Section>,
}

/// POST /api/v1/documents
///
/// Creates the document and any seeded sections, then records version 1 so
/// the document is born with history and pointer state.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateDocument>,
) -> AppResult<impl IntoResponse> {
    validate_title(&input.title)?;
    for section in &input.sections {
        validate_section_kind(&section.kind)?;
    }

    let document = DocumentRepo::create(
        &state.pool,
        auth.user_id,
        &input.title,
        input.case_info.as_ref(),
    )
    .await?;

    for section in &input.sections {
        SectionRepo::create(&state.pool, document.id, section).await?;
    }

    DocumentHistory::create_version(
        &state.pool,
        document.id,
        auth.user_id,
        ChangeType::Create,
        Some("Initial version"),
        None,
    )
    .await?;

    let sections = SectionRepo::list_by_document(&state.pool, document.id).await?;

    tracing::debug!(
        user_id = auth.user_id,
        document_id = document.id,
        "document created"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: DocumentDetail { document, sections },
        }),
    ))
}

/// GET /api/v1/documents
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<impl IntoResponse> {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let documents = DocumentRepo::list(&state.pool, limit).await?;
    Ok(Json(DataResponse { data: documents }))
}

/// GET /api/v1/documents/{id}
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let document = DocumentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Document",
            id,
        }))?;
    let sections = SectionRepo::list_by_document(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: DocumentDetail { document, sections },
    }))
}

/// PUT /api/v1/documents/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDocument>,
) -> AppResult<impl IntoResponse> {
    if let Some(title) = &input.title {
        validate_title(title)?;
    }

    let document = DocumentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Document",
            id,
        }))?;

    tracing::debug!(user_id = auth.user_id, document_id = id, "document updated");
    Ok(Json(DataResponse { data: document }))
}

/// DELETE /api/v1/documents/{id}
///
/// Cascades to sections, versions, and the pointer row.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = DocumentRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::debug!(user_id = auth.user_id, document_id = id, "document deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Document",
            id,
        }))
    }
}
