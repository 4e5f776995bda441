pub mod auth;
pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod play;
pub mod routes;
pub mod state;

pub use routes::app;
pub use state::AppState;
