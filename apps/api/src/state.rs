use std::sync::Arc;

use crate::config::Config;
use crate::match_client::CandidateMatcher;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub sessions: SessionStore,
    /// Pluggable matcher. Default: HttpCandidateMatcher against MATCH_ENDPOINT_URL.
    pub matcher: Arc<dyn CandidateMatcher>,
}
