use axum::extract::Extension;
use serde::Serialize;

use crate::auth::{has_role, Role};
use crate::middleware::{ApiResponse, AuthUser};

#[derive(Debug, Serialize)]
pub struct WhoamiResponse {
    pub id: String,
    pub role: Role,
    pub is_admin: bool,
}

/// GET /auth/whoami - Identity carried by the caller's token
pub async fn whoami(Extension(user): Extension<AuthUser>) -> ApiResponse<WhoamiResponse> {
    ApiResponse::success(WhoamiResponse {
        is_admin: has_role(&user, Role::Admin),
        id: user.id,
        role: user.role,
    })
}
