//! Prompt composition.
//!
//! Turns a `(prompt, category, style, language)` request into the single
//! composite instruction string sent to the generative-text service. The
//! composition is a pure function: no side effects, no external calls, and
//! no failure modes. Selector values are UI-driven enums, so unrecognized
//! tags degrade gracefully instead of erroring: an unknown language or
//! style contributes an empty directive, and an unknown category falls
//! back to passing the raw prompt through verbatim.
//!
//! The lookup tables below are the contract; tests assert on their exact
//! contents. Do not re-encode them as chained conditionals.

use serde::{Deserialize, Serialize};

/// Reply language selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Vietnamese.
    Vi,
    /// English.
    En,
    /// Japanese.
    Ja,
}

impl Language {
    /// Parses a selector tag. Unknown tags yield `None` (the default-on-miss
    /// path: an empty language directive).
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "vi" => Some(Self::Vi),
            "en" => Some(Self::En),
            "ja" => Some(Self::Ja),
            _ => None,
        }
    }

    /// The directive instructing the model which language to reply in.
    #[must_use]
    pub fn directive(self) -> &'static str {
        match self {
            Self::Vi => "Hãy trả lời bằng tiếng Việt.",
            Self::En => "Please respond in English.",
            Self::Ja => "日本語で答えてください。",
        }
    }
}

/// Writing style selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Plain, unembellished prose.
    Normal,
    /// Humorous and playful.
    Funny,
    /// Dark and mysterious.
    Dark,
    /// Poetic and vivid.
    Poetic,
    /// Epic and grand.
    Epic,
}

impl Style {
    /// Parses a selector tag. Unknown tags yield `None`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "normal" => Some(Self::Normal),
            "funny" => Some(Self::Funny),
            "dark" => Some(Self::Dark),
            "poetic" => Some(Self::Poetic),
            "epic" => Some(Self::Epic),
            _ => None,
        }
    }

    /// The style directive translated into the reply language.
    ///
    /// A recognized style with no translation for the given language
    /// (currently every Japanese entry) yields `None`, which composes as
    /// an empty segment rather than an error.
    #[must_use]
    pub fn directive(self, language: Language) -> Option<&'static str> {
        match (self, language) {
            (Self::Normal, Language::Vi) => Some("Viết theo phong cách bình thường."),
            (Self::Normal, Language::En) => Some("Write in a normal style."),
            (Self::Funny, Language::Vi) => {
                Some("Hãy làm cho nội dung trở nên hài hước và vui nhộn.")
            }
            (Self::Funny, Language::En) => Some("Make it funny and playful."),
            (Self::Dark, Language::Vi) => {
                Some("Viết theo phong cách u tối, bí ẩn và có chiều sâu.")
            }
            (Self::Dark, Language::En) => Some("Write in a dark, mysterious style."),
            (Self::Poetic, Language::Vi) => {
                Some("Viết theo phong cách thơ ca, đầy cảm xúc và hình ảnh.")
            }
            (Self::Poetic, Language::En) => Some("Write in a poetic, vivid style."),
            (Self::Epic, Language::Vi) => {
                Some("Viết theo phong cách sử thi, mạnh mẽ và hoành tráng.")
            }
            (Self::Epic, Language::En) => Some("Write in an epic, grand style."),
            (_, Language::Ja) => None,
        }
    }
}

/// Content category selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Short-story writing.
    Story,
    /// Song lyrics / music ideas.
    Music,
    /// Art ideas / creative guides.
    Art,
}

impl Category {
    /// Parses a selector tag. Unknown tags (including the explicit
    /// `"other"`) yield `None`, the passthrough policy.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "story" => Some(Self::Story),
            "music" => Some(Self::Music),
            "art" => Some(Self::Art),
            _ => None,
        }
    }

    /// Builds the base instruction by interpolating the raw prompt into the
    /// category template. Vietnamese gets the Vietnamese template; every
    /// other language selection uses the English one.
    #[must_use]
    pub fn base_instruction(self, language: Option<Language>, prompt: &str) -> String {
        let vietnamese = language == Some(Language::Vi);
        match self {
            Self::Story => {
                if vietnamese {
                    format!("Hãy viết một câu chuyện dựa trên ý tưởng: {prompt}.")
                } else {
                    format!("Write a story based on this idea: {prompt}.")
                }
            }
            Self::Music => {
                if vietnamese {
                    format!("Hãy sáng tác lời bài hát hoặc gợi ý nhạc dựa trên: {prompt}.")
                } else {
                    format!("Compose song lyrics or music ideas based on: {prompt}.")
                }
            }
            Self::Art => {
                if vietnamese {
                    format!("Hãy tạo một ý tưởng nghệ thuật hoặc hướng dẫn sáng tạo dựa trên: {prompt}.")
                } else {
                    format!("Create an art idea or creative guide based on: {prompt}.")
                }
            }
        }
    }
}

/// The transient input to prompt composition.
///
/// `prompt` must be non-empty after trimming; the HTTP boundary rejects
/// empty prompts before composition is ever invoked. The selector fields
/// hold `None` when the submitted tag was unrecognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositionRequest {
    /// The raw user prompt, trimmed.
    pub prompt: String,
    /// Content category; `None` means passthrough.
    pub category: Option<Category>,
    /// Writing style; `None` means no style directive.
    pub style: Option<Style>,
    /// Reply language; `None` means no language directive.
    pub language: Option<Language>,
}

impl CompositionRequest {
    /// Creates a request from raw selector tags, parsing each against its
    /// lookup table.
    #[must_use]
    pub fn from_tags(prompt: impl Into<String>, category: &str, style: &str, language: &str) -> Self {
        Self {
            prompt: prompt.into(),
            category: Category::from_tag(category),
            style: Style::from_tag(style),
            language: Language::from_tag(language),
        }
    }

    /// Composes the outbound instruction string.
    ///
    /// Deterministic and total: the three segments (language directive,
    /// style directive, base instruction) are joined in fixed order by
    /// single spaces, with missed lookups contributing empty segments.
    #[must_use]
    pub fn compose(&self) -> String {
        let language_directive = self.language.map(Language::directive).unwrap_or("");
        let style_directive = self
            .style
            .zip(self.language)
            .and_then(|(style, language)| style.directive(language))
            .unwrap_or("");
        let base = match self.category {
            Some(category) => category.base_instruction(self.language, &self.prompt),
            None => self.prompt.clone(),
        };

        format!("{language_directive} {style_directive} {base}")
    }
}
