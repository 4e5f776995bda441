use axum::extract::rejection::JsonRejection;
use axum::Json;
use uuid::Uuid;

use crate::content::ValidationErrors;
use crate::error::ApiError;

/// Malformed ids cannot name stored content, so they read as 404
pub fn parse_content_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| content_not_found(raw))
}

pub fn content_not_found(id: impl std::fmt::Display) -> ApiError {
    ApiError::not_found(format!("Content {} not found", id))
}

/// Turn a body extraction failure into a 400 with the rejection text
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| ApiError::bad_request(rejection.body_text()))
}

pub fn invalid_content(field_errors: ValidationErrors) -> ApiError {
    ApiError::validation_error("Invalid content payload", Some(field_errors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn malformed_id_is_not_found() {
        let err = parse_content_id("not-a-uuid").unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn valid_id_parses() {
        let id = Uuid::new_v4();
        assert_eq!(parse_content_id(&id.to_string()).unwrap(), id);
    }
}
