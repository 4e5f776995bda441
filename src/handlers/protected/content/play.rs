use axum::extract::{Extension, Path, State};
use serde::Serialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::play::Decision;
use crate::state::AppState;

use super::utils::{content_not_found, parse_content_id};

#[derive(Debug, Serialize)]
pub struct PlayResponse {
    pub content_id: Uuid,
    pub plays: u64,
    pub limit: u64,
    pub remaining: u64,
}

/// GET /content/:id/play - Open a play session, bounded per user and content
///
/// Content must exist before the attempt is counted: unknown ids return 404
/// and leave the counters untouched.
pub async fn play(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<PlayResponse> {
    let id = parse_content_id(&id)?;

    let content = state
        .contents
        .get_by_id(id)
        .await?
        .ok_or_else(|| content_not_found(id))?;

    let attempt = state.limiter.attempt(&content.id.to_string(), &user.id);
    match attempt.decision {
        Decision::Admitted => {
            tracing::debug!(
                "Play admitted for '{}' on {} ({}/{})",
                user.id, content.id, attempt.plays, attempt.limit
            );
            Ok(ApiResponse::success(PlayResponse {
                content_id: content.id,
                plays: attempt.plays,
                limit: attempt.limit,
                remaining: attempt.remaining(),
            }))
        }
        Decision::Rejected => {
            tracing::warn!(
                "Play rejected for '{}' on {}: limit of {} reached",
                user.id, content.id, attempt.limit
            );
            Err(ApiError::forbidden(format!(
                "Play sessions limit of {} reached for this content",
                attempt.limit
            )))
        }
    }
}
