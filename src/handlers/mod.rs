// handlers/mod.rs - Two-tier handler layout
//
// Public (no auth) and Protected (JWT auth). Role checks beyond "any valid
// user" happen inside the protected handlers via AuthUser::require.
pub mod protected;
pub mod public;
