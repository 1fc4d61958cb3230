use std::sync::Arc;

use crate::config::Config;
use crate::parsing::ResumeParser;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Stateless parse pipeline, shared by every upload.
    pub parser: Arc<ResumeParser>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            config,
            parser: Arc::new(ResumeParser::default()),
        }
    }
}
