// All LLM prompt constants for the Generation module.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::{ARTICLE_BRIEF_INTRO, ARTICLE_GUIDELINES, COMPONENT_INSTRUCTION};

/// General-purpose model used for the skeleton and expansion calls.
pub const DRAFT_MODEL: &str = "gpt-4";

pub const SKELETON_MAX_TOKENS: u32 = 2171;
pub const EXPAND_MAX_TOKENS: u32 = 3516;
pub const RESTYLE_MAX_TOKENS: u32 = 2048;

pub const DRAFT_TEMPERATURE: f32 = 1.0;
pub const RESTYLE_TEMPERATURE: f32 = 0.95;

/// Skeleton system prompt template.
/// Replace: {component_instruction}, {article_brief_intro}, {article_guidelines}
pub const SKELETON_SYSTEM_TEMPLATE: &str = "You are a capable chatbot that takes in the \"field of work\", \
and returns a skeleton/summary of a blogpost that such a business would put into their website. \
The output that you give will be displayed in a field for the user to modify, and then it will be \
shown to another agent so that it can be turned into a complete blogpost. \
{component_instruction}\n\n\
here are some guidelines that might be helpful: \n\n\
{article_brief_intro}\
Work Field:  (it will be sent to you as a message)\n\
{article_guidelines}";

/// Expansion system prompt template.
/// Replace: {component_instruction}, {article_brief_intro}, {article_guidelines}
pub const EXPAND_SYSTEM_TEMPLATE: &str = "You are a skilled blog writer tasked with creating an engaging \
article based on the skeleton that is provided to you. \
{component_instruction}\n\n\
Here are some guidelines that might be helpful: \n\n\
{article_brief_intro}\
Skeleton/summary of the desired blog post.\n\
{article_guidelines}";

/// Restyle system prompt template. Replace: {author}
pub const RESTYLE_SYSTEM_TEMPLATE: &str = "You are an AI agent trained by AICO, and you can rewrite \
the AI written text sent to you in the style of author {author}.";

fn fill_article_template(template: &str) -> String {
    template
        .replace("{component_instruction}", COMPONENT_INSTRUCTION)
        .replace("{article_brief_intro}", ARTICLE_BRIEF_INTRO)
        .replace("{article_guidelines}", ARTICLE_GUIDELINES)
}

pub fn skeleton_system_prompt() -> String {
    fill_article_template(SKELETON_SYSTEM_TEMPLATE)
}

pub fn expand_system_prompt() -> String {
    fill_article_template(EXPAND_SYSTEM_TEMPLATE)
}

pub fn restyle_system_prompt(author: &str) -> String {
    RESTYLE_SYSTEM_TEMPLATE.replace("{author}", author)
}
