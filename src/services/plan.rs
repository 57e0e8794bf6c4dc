//! Study plan pipeline: prompt -> (draft) -> completion -> Markdown cleanup.

use crate::config::LlmSettings;
use crate::domain::PlanParams;
use crate::llm::{ChatBackend, CompletionRequest, LlmError};
use crate::parser::reformat_plan;
use crate::prompts::{self, SYSTEM_PROMPT};

pub async fn generate_plan(
    backend: &dyn ChatBackend,
    settings: &LlmSettings,
    params: &PlanParams,
) -> Result<String, LlmError> {
    let prompt = if settings.draft_pass {
        let draft = backend
            .complete(CompletionRequest::new(
                &settings.plan_model,
                SYSTEM_PROMPT,
                prompts::plan_draft_prompt(params),
            ))
            .await?
            .into_text();
        tracing::debug!("Plan draft for {:?}: {} chars", params.topic, draft.len());
        prompts::plan_refine_prompt(params, &draft)
    } else {
        prompts::plan_prompt(params)
    };

    let raw = backend
        .complete(CompletionRequest::new(&settings.plan_model, SYSTEM_PROMPT, prompt))
        .await?
        .into_text();

    Ok(reformat_plan(&raw))
}
