// Shared prompt fragments.
// Each call site defines its own system prompt alongside it (see generation::prompts).
// This file contains the fragments repeated across those prompts.

/// Reminds the model that its output is consumed by another program step.
pub const COMPONENT_INSTRUCTION: &str = "***Very important: You are a piece of a bigger program, \
and so it is crucial that you respond as it is expected from you. try your best to respond, \
and if you cannot, respond with \"error\"***";

/// Opening of the article brief shared by the skeleton and expansion prompts.
pub const ARTICLE_BRIEF_INTRO: &str = "You are a skilled blog writer tasked with creating an engaging \
article based on a few key words. Your goal is to craft a compelling piece that fits the style and \
tone of the given magazine while incorporating the provided parameters naturally.\n\
Here's the information you'll be working with:\n";

/// Structure and content guidelines shared by the skeleton and expansion prompts.
pub const ARTICLE_GUIDELINES: &str = "Follow these guidelines to create your article:\n\
1. Structure: Begin with an attention-grabbing headline, followed by an introductory paragraph, \
3-4 main body paragraphs, and a conclusion.\n\
2. Content: Incorporate all the provided keywords into your article. Ensure they flow naturally \
within the context of your writing.\n\
3. Research: While you shouldn't cite specific sources, feel free to include relevant facts, \
statistics, or anecdotes that support your article's theme.\n\
5. Creativity: Use your imagination to create an interesting narrative or angle that ties the \
keywords together in an unexpected or insightful way.\n\
Remember, your goal is to create an engaging and informative article that seamlessly incorporates \
the given keywords while matching the style and tone of the specified magazine.";
