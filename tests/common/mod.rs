//! Shared helpers for integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use study_planner::config::{API_KEY_ENV, LlmSettings, Settings};
use study_planner::llm::{ChatBackend, CompletionRequest, GenerationOutput, LlmError};

/// Backend that replays canned outputs and records every request it sees.
#[derive(Default)]
pub struct FakeBackend {
    responses: Mutex<VecDeque<Result<GenerationOutput, LlmError>>>,
    calls: Mutex<Vec<CompletionRequest>>,
}

impl FakeBackend {
    pub fn replying(texts: &[&str]) -> Arc<Self> {
        let fake = Self::default();
        {
            let mut responses = fake.responses.lock().unwrap();
            for text in texts {
                responses.push_back(Ok(GenerationOutput::from_message(text)));
            }
        }
        Arc::new(fake)
    }

    pub fn failing(error: LlmError) -> Arc<Self> {
        let fake = Self::default();
        fake.responses.lock().unwrap().push_back(Err(error));
        Arc::new(fake)
    }

    pub fn calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatBackend for FakeBackend {
    async fn complete(&self, request: CompletionRequest) -> Result<GenerationOutput, LlmError> {
        self.calls.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(LlmError::EmptyResponse))
    }
}

/// Default settings with a dummy key and the given extra env values.
pub fn settings_with(pairs: &[(&str, &str)]) -> Settings {
    let pairs: Vec<(String, String)> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Settings::from_sources(None, move |key| {
        if key == API_KEY_ENV {
            return Some("test-key".to_string());
        }
        pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
    })
    .unwrap()
}

pub fn llm_settings() -> LlmSettings {
    settings_with(&[]).llm
}
