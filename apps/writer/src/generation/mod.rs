// Blogpost generation: prompts, tone selection, the skeleton → draft → restyle pipeline,
// and its JSON API. All LLM calls go through llm_client — no direct HTTP calls here.

pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod tone;
