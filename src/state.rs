//! Application state shared by all handlers.

use std::sync::Arc;

use crate::config::LlmSettings;
use crate::llm::ChatBackend;

/// Built once at startup and cloned into every request.
#[derive(Clone)]
pub struct AppState {
    /// Chat-completion backend (the real client in production, a fake in tests)
    pub backend: Arc<dyn ChatBackend>,

    /// Model names and sampling knobs
    pub llm: Arc<LlmSettings>,
}

impl AppState {
    pub fn new(backend: Arc<dyn ChatBackend>, llm: LlmSettings) -> Self {
        Self {
            backend,
            llm: Arc::new(llm),
        }
    }
}
