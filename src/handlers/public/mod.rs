// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Service information and liveness only; everything touching content lives
// under protected.

pub mod service;

pub use service::{health, root};
