use axum::{
    extract::{rejection::JsonRejection, Extension, State},
    Json,
};

use crate::auth::Role;
use crate::content::{Content, NewContent};
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

use super::utils::{invalid_content, json_body};

/// GET /content - List all content
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Content>> {
    let all = state.contents.list().await?;
    Ok(ApiResponse::success(all))
}

/// POST /content - Create content (admin only)
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<NewContent>, JsonRejection>,
) -> ApiResult<Content> {
    user.require(Role::Admin)?;

    let new = json_body(payload)?;
    new.validate().map_err(invalid_content)?;

    let created = state.contents.create(new).await?;
    tracing::info!("Content {} created by '{}'", created.id, user.id);

    Ok(ApiResponse::created(created))
}
