use axum::{
    extract::{rejection::JsonRejection, Extension, Path, State},
    Json,
};

use crate::auth::Role;
use crate::content::{Content, ContentPatch};
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

use super::utils::{content_not_found, invalid_content, json_body, parse_content_id};

/// GET /content/:id - Fetch a single content record
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Content> {
    let id = parse_content_id(&id)?;

    let content = state
        .contents
        .get_by_id(id)
        .await?
        .ok_or_else(|| content_not_found(id))?;

    Ok(ApiResponse::success(content))
}

/// PUT /content/:id - Update fields of a content record (admin only)
pub async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    payload: Result<Json<ContentPatch>, JsonRejection>,
) -> ApiResult<Content> {
    user.require(Role::Admin)?;
    let id = parse_content_id(&id)?;

    let patch = json_body(payload)?;
    patch.validate().map_err(invalid_content)?;

    let updated = state
        .contents
        .update(id, patch)
        .await?
        .ok_or_else(|| content_not_found(id))?;
    tracing::info!("Content {} updated by '{}'", id, user.id);

    Ok(ApiResponse::success(updated))
}

/// DELETE /content/:id - Remove a content record (admin only)
pub async fn delete(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    user.require(Role::Admin)?;
    let id = parse_content_id(&id)?;

    if !state.contents.delete(id).await? {
        return Err(content_not_found(id));
    }
    tracing::info!("Content {} deleted by '{}'", id, user.id);

    Ok(ApiResponse::no_content())
}
