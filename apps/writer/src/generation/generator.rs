//! Blogpost Generation — the request/response pipeline behind both UI buttons.
//!
//! Flow: summarize(field_of_work) → [user edits skeleton] →
//!       expand(skeleton) → restyle(draft, style) | passthrough(draft)
//!
//! Every step is a single remote call. Failures are converted to
//! `GenerationFailure` here and never propagate as anything else.

use thiserror::Error;
use tracing::{info, warn};

use crate::generation::prompts::{
    expand_system_prompt, restyle_system_prompt, skeleton_system_prompt, DRAFT_MODEL,
    DRAFT_TEMPERATURE, EXPAND_MAX_TOKENS, RESTYLE_MAX_TOKENS, RESTYLE_TEMPERATURE,
    SKELETON_MAX_TOKENS,
};
use crate::generation::tone::{AuthorStyle, Tone};
use crate::llm_client::{GenerationRequest, LlmError, TextGenerator};

/// A failed generation step. Displays as `Error: <message>`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error: {message}")]
pub struct GenerationFailure {
    pub message: String,
}

impl From<LlmError> for GenerationFailure {
    fn from(e: LlmError) -> Self {
        Self {
            message: e.to_string(),
        }
    }
}

pub type GenerationResult = Result<String, GenerationFailure>;

/// Renders a result the way it is shown to the user: the text, or the `Error: ` string.
pub fn display_result(result: GenerationResult) -> String {
    result.unwrap_or_else(|failure| failure.to_string())
}

fn draft_request(system_prompt: String, user_content: &str, max_tokens: u32) -> GenerationRequest {
    GenerationRequest {
        system_prompt,
        user_content: user_content.to_string(),
        model: DRAFT_MODEL.to_string(),
        temperature: DRAFT_TEMPERATURE,
        max_tokens,
        top_p: 1.0,
        frequency_penalty: 0.0,
        presence_penalty: 0.0,
    }
}

async fn run(llm: &dyn TextGenerator, step: &str, request: GenerationRequest) -> GenerationResult {
    match llm.generate(&request).await {
        Ok(text) => {
            info!("{step} succeeded ({} chars, model={})", text.len(), request.model);
            Ok(text)
        }
        Err(e) => {
            warn!("{step} failed (model={}): {e}", request.model);
            Err(e.into())
        }
    }
}

/// Drafts a skeleton/summary for a blogpost about the given field of work.
pub async fn summarize(llm: &dyn TextGenerator, field_of_work: &str) -> GenerationResult {
    let request = draft_request(skeleton_system_prompt(), field_of_work, SKELETON_MAX_TOKENS);
    run(llm, "summarize", request).await
}

/// Expands a (possibly user-edited) skeleton into a full draft article.
pub async fn expand(llm: &dyn TextGenerator, skeleton: &str) -> GenerationResult {
    let request = draft_request(expand_system_prompt(), skeleton, EXPAND_MAX_TOKENS);
    run(llm, "expand", request).await
}

/// Rewrites a draft in the voice of the given author style model.
pub async fn restyle(llm: &dyn TextGenerator, draft: &str, style: AuthorStyle) -> GenerationResult {
    let request = GenerationRequest {
        system_prompt: restyle_system_prompt(style.author),
        user_content: draft.to_string(),
        model: style.model.to_string(),
        temperature: RESTYLE_TEMPERATURE,
        max_tokens: RESTYLE_MAX_TOKENS,
        top_p: 1.0,
        frequency_penalty: 0.0,
        presence_penalty: 0.0,
    };
    run(llm, "restyle", request).await
}

/// Identity step for the `AI written` tone.
pub fn passthrough(draft: String) -> GenerationResult {
    Ok(draft)
}

/// Expands the skeleton, then applies the tone's style rewrite if it has one.
///
/// The rewrite only ever sees `expand`'s output. An expansion failure is
/// returned as-is and no rewrite call is made.
pub async fn write_blogpost(llm: &dyn TextGenerator, skeleton: &str, tone: Tone) -> GenerationResult {
    info!("Writing blogpost with tone '{}'", tone.label());
    let draft = expand(llm, skeleton).await?;
    match tone.style() {
        Some(style) => restyle(llm, &draft, style).await,
        None => passthrough(draft),
    }
}
