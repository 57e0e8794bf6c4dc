//! Quiz pipeline: prompt -> completion -> line parser.

use crate::config::LlmSettings;
use crate::domain::{QuizParams, QuizQuestion};
use crate::llm::{ChatBackend, CompletionRequest, LlmError};
use crate::parser::parse_questions;
use crate::prompts::{self, SYSTEM_PROMPT};

pub async fn generate_quiz(
    backend: &dyn ChatBackend,
    settings: &LlmSettings,
    params: &QuizParams,
) -> Result<Vec<QuizQuestion>, LlmError> {
    let raw = backend
        .complete(CompletionRequest::new(
            &settings.quiz_model,
            SYSTEM_PROMPT,
            prompts::quiz_prompt(params),
        ))
        .await?
        .into_text();

    let questions = parse_questions(&raw);
    if questions.len() != params.num_questions as usize {
        tracing::warn!(
            "Asked for {} questions about {:?}, parsed {}",
            params.num_questions,
            params.topic,
            questions.len()
        );
    }

    Ok(questions)
}
