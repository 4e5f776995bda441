use axum::{
    body::{to_bytes, Body},
    extract::{Query, Request, State},
    http::{header, HeaderMap, Uri},
    middleware::Next,
    response::Response,
};
use serde::Deserialize;

use crate::auth::{has_role, Claims, Principal, Role};
use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated caller extracted from JWT
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub id: String,
    pub role: Role,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            role: claims.role,
        }
    }
}

impl Principal for AuthUser {
    fn id(&self) -> &str {
        &self.id
    }

    fn role(&self) -> Role {
        self.role
    }
}

impl AuthUser {
    /// Fail with 401 unless the caller holds `required`
    pub fn require(&self, required: Role) -> Result<(), ApiError> {
        if has_role(self, required) {
            Ok(())
        } else {
            tracing::warn!("User '{}' with role '{}' denied: requires '{}'", self.id, self.role, required);
            Err(ApiError::unauthorized(format!("Requires {} role", required)))
        }
    }
}

/// Upper bound on a body buffered while looking for `access_token`
const MAX_TOKEN_BODY_BYTES: usize = 2 * 1024 * 1024;

/// `access_token` as carried in a query string or JSON body
#[derive(Debug, Default, Deserialize)]
struct AccessToken {
    access_token: Option<String>,
}

impl AccessToken {
    fn into_token(self) -> Option<String> {
        self.access_token
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
    }
}

/// JWT authentication middleware that validates tokens and extracts user context.
///
/// The token is looked up in the `Authorization: Bearer` header, then the
/// `access_token` query parameter, then an `access_token` field of a JSON
/// body. A present but malformed Authorization header is not skipped.
pub async fn jwt_auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let path = request.uri().path().to_string();

    let (token, mut request) = extract_access_token(request).await?;
    let token = token.ok_or_else(|| {
        tracing::debug!("Rejected request to {}: no access token", path);
        ApiError::unauthorized("Missing access token")
    })?;

    let claims = state.tokens.verify(&token).map_err(|e| {
        tracing::warn!("Rejected token for {}: {}", path, e);
        ApiError::from(e)
    })?;

    request.extensions_mut().insert(AuthUser::from(claims));

    Ok(next.run(request).await)
}

/// Find the caller's token, handing back the request with its body intact
async fn extract_access_token(request: Request) -> Result<(Option<String>, Request), ApiError> {
    if request.headers().contains_key(header::AUTHORIZATION) {
        let token = extract_jwt_from_headers(request.headers()).map_err(ApiError::unauthorized)?;
        return Ok((Some(token), request));
    }

    if let Some(token) = token_from_query(request.uri()) {
        return Ok((Some(token), request));
    }

    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, MAX_TOKEN_BODY_BYTES)
        .await
        .map_err(|e| ApiError::bad_request(format!("Failed to read request body: {}", e)))?;
    let token = token_from_body(&bytes);

    Ok((token, Request::from_parts(parts, Body::from(bytes))))
}

fn token_from_query(uri: &Uri) -> Option<String> {
    Query::<AccessToken>::try_from_uri(uri)
        .ok()
        .and_then(|Query(query)| query.into_token())
}

fn token_from_body(bytes: &[u8]) -> Option<String> {
    if bytes.is_empty() {
        return None;
    }
    serde_json::from_slice::<AccessToken>(bytes)
        .ok()
        .and_then(AccessToken::into_token)
}

/// Extract JWT token from Authorization header
fn extract_jwt_from_headers(headers: &HeaderMap) -> Result<String, String> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| "Missing Authorization header".to_string())?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Invalid Authorization header format".to_string())?;

    if let Some(token) = auth_str.strip_prefix("Bearer ") {
        if token.trim().is_empty() {
            return Err("Empty JWT token".to_string());
        }
        Ok(token.trim().to_string())
    } else {
        Err("Authorization header must use Bearer token format".to_string())
    }
}
