use std::sync::Arc;

use crate::documents::store::DocumentStore;
use crate::llm_client::ChatCompletion;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Brochure text; not ready until the startup load publishes it.
    pub documents: Arc<DocumentStore>,
    /// Chat-completion backend. Default: `LlmClient` against the OpenAI API.
    pub llm: Arc<dyn ChatCompletion>,
}
