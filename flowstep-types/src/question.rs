/// A single question in a flow.
///
/// The prompt text doubles as the question's lookup key when answers are
/// committed into the [`AnswersSummary`](crate::AnswersSummary), so prompts
/// must be unique within a flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// The prompt text shown to the user.
    prompt: String,

    /// The shape of the answer this question collects.
    shape: AnswerShape,
}

impl Question {
    /// Create a new question with the given prompt and answer shape.
    pub fn new(prompt: impl Into<String>, shape: AnswerShape) -> Self {
        Self {
            prompt: prompt.into(),
            shape,
        }
    }

    /// Create a free-text question.
    pub fn free_text(prompt: impl Into<String>) -> Self {
        Self::new(prompt, AnswerShape::FreeText)
    }

    /// Create a single-choice question with the given options.
    pub fn single_choice(
        prompt: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::new(
            prompt,
            AnswerShape::SingleChoice {
                options: options.into_iter().map(Into::into).collect(),
            },
        )
    }

    /// Create a multi-choice question with the given options.
    pub fn multi_choice(
        prompt: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::new(
            prompt,
            AnswerShape::MultiChoice {
                options: options.into_iter().map(Into::into).collect(),
            },
        )
    }

    /// Create an external-link acknowledgment step.
    pub fn external_link(prompt: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(prompt, AnswerShape::ExternalLink { url: url.into() })
    }

    /// Get the prompt text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Get the answer shape.
    pub fn shape(&self) -> &AnswerShape {
        &self.shape
    }
}

/// The shape of a question's answer, determining input type and validation.
///
/// Equality compares associated data, not just the variant tag: two
/// single-choice shapes with different option sets are distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerShape {
    /// Free-form text input.
    FreeText,

    /// Exactly one option from an ordered set.
    SingleChoice { options: Vec<String> },

    /// Any number of options from an ordered set.
    MultiChoice { options: Vec<String> },

    /// An acknowledgment-only step pointing at an external document.
    ExternalLink { url: String },
}

impl AnswerShape {
    /// Check if this shape offers an enumerated option set.
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::SingleChoice { .. } | Self::MultiChoice { .. })
    }

    /// Get the option set, if this is a choice shape.
    pub fn options(&self) -> Option<&[String]> {
        match self {
            Self::SingleChoice { options } | Self::MultiChoice { options } => Some(options),
            _ => None,
        }
    }
}
