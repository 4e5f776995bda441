// handlers/protected/mod.rs - Protected handlers (JWT authentication required)
//
// Every route here sits behind jwt_auth_middleware, so handlers can rely on
// an AuthUser extension being present. Unauthenticated callers get 401
// before any lookup happens.

pub mod auth;
pub mod content;
