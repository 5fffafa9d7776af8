use std::sync::Arc;

use crate::config::Config;
use crate::scoring::scorer::{KeywordMatchScorer, MatchScorer};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only scorer shared by every request. Default: KeywordMatchScorer.
    pub scorer: Arc<dyn MatchScorer>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            scorer: Arc::new(KeywordMatchScorer::default()),
        }
    }
}
