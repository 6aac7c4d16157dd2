//! Shared application state

use std::sync::Arc;
use std::time::Duration;

use crate::config::ApiConfig;
use crate::fixtures::FixtureStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Cached mock fixtures
    pub fixtures: Arc<FixtureStore>,
    /// Bearer secret protected routes require
    pub api_secret: Option<Arc<str>>,
    /// Skip auth when no secret is configured
    pub dev_mode: bool,
}

impl AppState {
    pub fn new(fixtures: FixtureStore, api_secret: Option<String>, dev_mode: bool) -> Self {
        Self {
            fixtures: Arc::new(fixtures),
            api_secret: api_secret.filter(|s| !s.is_empty()).map(Arc::from),
            dev_mode,
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        let fixtures = FixtureStore::new(
            &config.fixtures_dir,
            Duration::from_secs(config.cache_ttl_secs),
        );
        Self::new(fixtures, config.api_secret.clone(), config.dev)
    }
}
