use std::sync::Arc;

use crate::advisor::AdvisorBackend;
use crate::analysis::AnalyzerOptions;

/// Shared application state injected into all route handlers via Axum
/// extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable advisor backend. Default: GeminiAdvisor; swap the trait
    /// object to change providers without touching handlers.
    pub advisor: Arc<dyn AdvisorBackend>,
    /// Engine options resolved once at startup (synonym determinism).
    pub analyzer_options: AnalyzerOptions,
}
