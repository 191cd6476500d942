use std::sync::Arc;

use crate::scoring::ResumeScorer;
use crate::storage::BlobStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: BlobStore,
    /// Pluggable scorer. Default: `RuleScorer` compiled from the stock rules.
    pub scorer: Arc<dyn ResumeScorer>,
}
