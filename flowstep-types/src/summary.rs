use std::collections::HashMap;

/// The durable record of committed answers for one flow instance.
///
/// Keys are question prompts; values are the chosen answer strings in the
/// order they were selected. Recording an answer for a prompt that already
/// has one overwrites the previous entry - the summary always reflects the
/// most recent pass through each question.
#[derive(Debug, Clone, Default)]
pub struct AnswersSummary {
    values: HashMap<String, Vec<String>>,
}

impl AnswersSummary {
    /// Create a new empty summary.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Record the answers for a prompt, replacing any previous entry.
    pub fn record(&mut self, prompt: impl Into<String>, answers: Vec<String>) {
        self.values.insert(prompt.into(), answers);
    }

    /// Get the committed answers for a prompt.
    pub fn get(&self, prompt: &str) -> Option<&[String]> {
        self.values.get(prompt).map(Vec::as_slice)
    }

    /// Get the first committed answer for a prompt, if any.
    pub fn first(&self, prompt: &str) -> Option<&str> {
        self.get(prompt).and_then(|answers| {
            answers.first().map(String::as_str)
        })
    }

    /// Check if a prompt has a committed answer.
    pub fn contains(&self, prompt: &str) -> bool {
        self.values.contains_key(prompt)
    }

    /// Get an iterator over all prompt-answers pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.values
            .iter()
            .map(|(prompt, answers)| (prompt.as_str(), answers.as_slice()))
    }

    /// Get the number of answered prompts.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no answers have been committed.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
