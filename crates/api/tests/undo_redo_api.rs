//! HTTP-level integration tests for the undo and redo endpoints.
//!
//! Exercises the wire contract the editor's undo/redo buttons depend on:
//! success payloads carry the applied version, its snapshot, and refreshed
//! status flags; exhausted boundaries answer 409 with machine-readable
//! codes; corrupt pointer state answers 500 and is never repaired.

mod common;

use axum::http::StatusCode;
use common::{auth_token, body_json, build_test_app, get_auth, post_json_auth, put_json_auth};
use lexdraft_db::repositories::DocumentRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create a document with one `facts` section via the API.
/// Returns `(document_id, section_id)`; the document starts at version 1.
async fn seed_document(pool: &PgPool, token: &str) -> (i64, i64) {
    let body = serde_json::json!({
        "title": "Letter before claim",
        "sections": [
            { "kind": "facts", "content": "v1 content", "position": 1 }
        ]
    });
    let response =
        post_json_auth(build_test_app(pool.clone()), "/api/v1/documents", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let data = body_json(response).await["data"].clone();
    (
        data["id"].as_i64().unwrap(),
        data["sections"][0]["id"].as_i64().unwrap(),
    )
}

/// Overwrite the section's live content, then record it as a new version.
async fn edit_and_save(
    pool: &PgPool,
    token: &str,
    document_id: i64,
    section_id: i64,
    content: &str,
) {
    let response = put_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/documents/{document_id}/sections/{section_id}"),
        serde_json::json!({ "content": content }),
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/documents/{document_id}/versions"),
        serde_json::json!({ "changeType": "update", "sectionId": section_id }),
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

/// POST to the undo or redo endpoint.
async fn step(pool: &PgPool, token: &str, document_id: i64, op: &str) -> axum::http::StatusCode {
    let response = post_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/documents/{document_id}/{op}"),
        serde_json::json!({}),
        token,
    )
    .await;
    response.status()
}

// ---------------------------------------------------------------------------
// Test: undo answers with the applied version, snapshot, and status
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_undo_returns_previous_version(pool: PgPool) {
    let token = auth_token(1);
    let (document_id, section_id) = seed_document(&pool, &token).await;
    edit_and_save(&pool, &token, document_id, section_id, "second draft").await;

    let response = post_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/documents/{document_id}/undo"),
        serde_json::json!({}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = body_json(response).await["data"].clone();
    assert_eq!(data["versionNumber"], 1);
    assert_eq!(data["snapshot"]["sections"][0]["content"], "v1 content");
    assert_eq!(data["status"]["currentVersion"], 1);
    assert_eq!(data["status"]["canUndo"], false);
    assert_eq!(data["status"]["canRedo"], true);

    // Live content actually reverted.
    let response = get_auth(
        build_test_app(pool),
        &format!("/api/v1/documents/{document_id}"),
        &token,
    )
    .await;
    let doc = body_json(response).await["data"].clone();
    assert_eq!(doc["sections"][0]["content"], "v1 content");
}

// ---------------------------------------------------------------------------
// Test: redo re-applies the undone version
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_redo_reapplies_undone_version(pool: PgPool) {
    let token = auth_token(1);
    let (document_id, section_id) = seed_document(&pool, &token).await;
    edit_and_save(&pool, &token, document_id, section_id, "second draft").await;
    assert_eq!(step(&pool, &token, document_id, "undo").await, StatusCode::OK);

    let response = post_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/documents/{document_id}/redo"),
        serde_json::json!({}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = body_json(response).await["data"].clone();
    assert_eq!(data["versionNumber"], 2);
    assert_eq!(data["snapshot"]["sections"][0]["content"], "second draft");
    assert_eq!(data["status"]["canUndo"], true);
    assert_eq!(data["status"]["canRedo"], false);

    let response = get_auth(
        build_test_app(pool),
        &format!("/api/v1/documents/{document_id}"),
        &token,
    )
    .await;
    let doc = body_json(response).await["data"].clone();
    assert_eq!(doc["sections"][0]["content"], "second draft");
}

// ---------------------------------------------------------------------------
// Test: exhausted boundaries answer 409 with machine-readable codes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_undo_at_oldest_version_409(pool: PgPool) {
    let token = auth_token(1);
    let (document_id, _) = seed_document(&pool, &token).await;

    let response = post_json_auth(
        build_test_app(pool),
        &format!("/api/v1/documents/{document_id}/undo"),
        serde_json::json!({}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOTHING_TO_UNDO");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_redo_without_pending_409(pool: PgPool) {
    let token = auth_token(1);
    let (document_id, _) = seed_document(&pool, &token).await;

    let response = post_json_auth(
        build_test_app(pool),
        &format!("/api/v1/documents/{document_id}/redo"),
        serde_json::json!({}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOTHING_TO_REDO");
}

// ---------------------------------------------------------------------------
// Test: missing documents and empty histories answer 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_undo_missing_document_404(pool: PgPool) {
    let token = auth_token(1);
    let status = step(&pool, &token, 424242, "undo").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_undo_without_history_404(pool: PgPool) {
    let token = auth_token(1);

    // Bypass the API so the document exists without any version rows.
    let document = DocumentRepo::create(&pool, 1, "Unversioned letter", None)
        .await
        .unwrap();

    let response = post_json_auth(
        build_test_app(pool),
        &format!("/api/v1/documents/{}/undo", document.id),
        serde_json::json!({}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NO_VERSION_HISTORY");
}

// ---------------------------------------------------------------------------
// Test: corrupt pointer state answers 500 and is left untouched
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_corrupt_pointers_500(pool: PgPool) {
    let token = auth_token(1);
    let (document_id, section_id) = seed_document(&pool, &token).await;
    edit_and_save(&pool, &token, document_id, section_id, "second draft").await;

    // Corrupt the triple directly: current beyond head.
    sqlx::query("UPDATE version_pointers SET current_version = 9 WHERE document_id = $1")
        .bind(document_id)
        .execute(&pool)
        .await
        .unwrap();

    let response = post_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/documents/{document_id}/undo"),
        serde_json::json!({}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["code"], "CORRUPT_POINTER_STATE");

    // The corrupt row survives for inspection.
    let current: i64 = sqlx::query_scalar(
        "SELECT current_version FROM version_pointers WHERE document_id = $1",
    )
    .bind(document_id)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(current, 9, "corrupt state must never be auto-repaired");
}

// ---------------------------------------------------------------------------
// Test: saving after undo drops the redo horizon
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_new_version_after_undo_discards_redo(pool: PgPool) {
    let token = auth_token(1);
    let (document_id, section_id) = seed_document(&pool, &token).await;
    edit_and_save(&pool, &token, document_id, section_id, "second draft").await;
    edit_and_save(&pool, &token, document_id, section_id, "third draft").await;

    assert_eq!(step(&pool, &token, document_id, "undo").await, StatusCode::OK);
    assert_eq!(step(&pool, &token, document_id, "undo").await, StatusCode::OK);

    // Record a fresh edit from version 1.
    edit_and_save(&pool, &token, document_id, section_id, "new direction").await;

    let response = get_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/documents/{document_id}/versions/status"),
        &token,
    )
    .await;
    let status = body_json(response).await["data"].clone();
    assert_eq!(status["currentVersion"], 4, "new version lands at head + 1");
    assert_eq!(status["canRedo"], false, "the redo horizon is gone");

    // Versions 2 and 3 are orphaned but still listed.
    let response = get_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/documents/{document_id}/versions"),
        &token,
    )
    .await;
    let data = body_json(response).await["data"].clone();
    assert_eq!(data["versions"].as_array().unwrap().len(), 4);

    let redo_after = step(&pool, &token, document_id, "redo").await;
    assert_eq!(redo_after, StatusCode::CONFLICT);
}
