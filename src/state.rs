use std::sync::Arc;

use crate::auth::{TokenError, TokenService};
use crate::config::AppConfig;
use crate::content::{ContentRepository, InMemoryContentRepository};
use crate::play::{InMemoryPlayCounterStore, PlayCounterStore, PlaySessionLimiter};

// app's shared state, cloned into every handler

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub tokens: Arc<TokenService>,
    pub contents: Arc<dyn ContentRepository>,
    pub limiter: Arc<PlaySessionLimiter>,
}

impl AppState {
    /// State backed by in-memory content and play counter stores
    pub fn new(config: AppConfig) -> Result<Self, TokenError> {
        Self::with_stores(
            config,
            Arc::new(InMemoryContentRepository::new()),
            Arc::new(InMemoryPlayCounterStore::new()),
        )
    }

    pub fn with_stores(
        config: AppConfig,
        contents: Arc<dyn ContentRepository>,
        play_counters: Arc<dyn PlayCounterStore>,
    ) -> Result<Self, TokenError> {
        let tokens = TokenService::from_config(&config.security)?;
        let limiter = PlaySessionLimiter::new(play_counters, config.play.sessions_limit);

        Ok(Self {
            config: Arc::new(config),
            tokens: Arc::new(tokens),
            contents,
            limiter: Arc::new(limiter),
        })
    }
}
