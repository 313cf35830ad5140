use flowstep_types::Question;

use crate::BranchRule;

/// What happens when the cursor advances off the last question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Terminal {
    /// The flow ends on a summary screen; the caller submits explicitly.
    #[default]
    Summary,

    /// Completing the last question triggers submission directly.
    Submit,
}

/// The static definition of one flow: its question sequence, branch rules,
/// and terminal behavior.
///
/// Templates are plain values built with the `question`/`rule` builder
/// methods; the engine validates them at construction (non-empty sequence,
/// non-empty option sets) so a malformed template fails fast rather than
/// mid-flow.
#[derive(Debug, Clone)]
pub struct FlowTemplate {
    name: String,
    questions: Vec<Question>,
    rules: Vec<BranchRule>,
    terminal: Terminal,
}

impl FlowTemplate {
    /// Create a new empty template with the given flow name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            questions: Vec::new(),
            rules: Vec::new(),
            terminal: Terminal::default(),
        }
    }

    /// Append a question to the sequence.
    #[must_use]
    pub fn question(mut self, question: Question) -> Self {
        self.questions.push(question);
        self
    }

    /// Append several questions to the sequence.
    #[must_use]
    pub fn questions(mut self, questions: impl IntoIterator<Item = Question>) -> Self {
        self.questions.extend(questions);
        self
    }

    /// Append a branch rule. Rules are evaluated in declaration order.
    #[must_use]
    pub fn rule(mut self, rule: BranchRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Set the terminal behavior.
    #[must_use]
    pub fn terminal(mut self, terminal: Terminal) -> Self {
        self.terminal = terminal;
        self
    }

    /// Get the flow name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the question sequence.
    pub fn question_list(&self) -> &[Question] {
        &self.questions
    }

    /// Get the branch rules.
    pub fn rule_list(&self) -> &[BranchRule] {
        &self.rules
    }

    /// Get the terminal behavior.
    pub fn terminal_behavior(&self) -> Terminal {
        self.terminal
    }

    pub(crate) fn into_parts(self) -> (String, Vec<Question>, Vec<BranchRule>, Terminal) {
        (self.name, self.questions, self.rules, self.terminal)
    }
}
