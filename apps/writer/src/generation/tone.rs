//! Tone selection — maps the user's tone choice to an author style model.
//!
//! Two tones name a fine-tuned author voice. `AI written` has no style model and
//! leaves the expanded draft untouched.

use serde::{Deserialize, Serialize};

/// A fine-tuned model that rewrites drafts in one author's voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthorStyle {
    pub author: &'static str,
    pub model: &'static str,
}

pub const JOE_GUAY: AuthorStyle = AuthorStyle {
    author: "Joe Guay",
    model: "ft:gpt-3.5-turbo-0125:vdidopenai:author-style-joe:9hjTUH3a",
};

pub const SHANKAR_NARAYAN: AuthorStyle = AuthorStyle {
    author: "Shankar Narayan",
    model: "ft:gpt-3.5-turbo-0125:vdidopenai:author-style-shank:9hjAJh7P",
};

/// Tone options offered by the writer form. Serialized by their display label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    #[serde(rename = "Joe Guay")]
    JoeGuay,
    #[serde(rename = "Shankar Narayan")]
    ShankarNarayan,
    #[serde(rename = "AI written")]
    AiWritten,
}

impl Tone {
    /// Display order of the radio group.
    pub const ALL: [Tone; 3] = [Tone::JoeGuay, Tone::ShankarNarayan, Tone::AiWritten];

    pub fn label(self) -> &'static str {
        match self {
            Tone::JoeGuay => "Joe Guay",
            Tone::ShankarNarayan => "Shankar Narayan",
            Tone::AiWritten => "AI written",
        }
    }

    /// The style model to restyle with, or `None` when the raw draft is kept.
    pub fn style(self) -> Option<AuthorStyle> {
        match self {
            Tone::JoeGuay => Some(JOE_GUAY),
            Tone::ShankarNarayan => Some(SHANKAR_NARAYAN),
            Tone::AiWritten => None,
        }
    }
}
