use chrono::NaiveDate;
use flowstep_types::{Alert, AnswerShape, AnswersSummary, FlowError, Question};

use crate::{BranchAction, BranchRule, FlowTemplate, Terminal};

/// The outcome of one [`FlowEngine::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The cursor moved to another question.
    Moved,

    /// A branch rule blocked the transition; the cursor did not move and the
    /// alert is now active.
    Blocked(Alert),

    /// The cursor advanced off the last question; the flow is complete.
    Completed,
}

/// The navigation and branching engine for one flow instance.
///
/// The engine exclusively owns the question sequence, the cursor, and all
/// answer state. The sequence only grows at runtime (follow-up insertion);
/// the cursor stays in `0..len` by construction. Ephemeral answer fields
/// (`selected`, `custom_answer`, `free_text`) are cleared on every
/// transition; committed answers live in the durable [`AnswersSummary`] for
/// the flow's whole lifetime.
#[derive(Debug, Clone)]
pub struct FlowEngine {
    name: String,
    questions: Vec<Question>,
    rules: Vec<BranchRule>,
    /// Insert rules fire at most once, so retreating past a trigger question
    /// and re-answering it cannot splice duplicate follow-ups.
    fired: Vec<bool>,
    terminal: Terminal,
    cursor: usize,
    selected: Vec<String>,
    custom_answer: String,
    free_text: String,
    summary: AnswersSummary,
    active_alert: Option<Alert>,
    completed: bool,
    today: NaiveDate,
}

impl FlowEngine {
    /// Build an engine from a template.
    ///
    /// Fails if the template has no questions, if an insert rule carries an
    /// empty follow-up list, or if any reachable choice question (including
    /// rule follow-ups) has an empty option set.
    pub fn new(template: FlowTemplate) -> Result<Self, FlowError> {
        let (name, questions, rules, terminal) = template.into_parts();
        if questions.is_empty() {
            return Err(FlowError::EmptyTemplate(name));
        }
        for question in &questions {
            check_options(question)?;
        }
        for rule in &rules {
            if let BranchAction::InsertFollowUps(follow_ups) = rule.action() {
                if follow_ups.is_empty() {
                    return Err(FlowError::EmptyFollowUps(rule.trigger().to_string()));
                }
                for question in follow_ups {
                    check_options(question)?;
                }
            }
        }
        let fired = vec![false; rules.len()];
        Ok(Self {
            name,
            questions,
            rules,
            fired,
            terminal,
            cursor: 0,
            selected: Vec::new(),
            custom_answer: String::new(),
            free_text: String::new(),
            summary: AnswersSummary::new(),
            active_alert: None,
            completed: false,
            today: chrono::Local::now().date_naive(),
        })
    }

    /// Override the engine's notion of "today" for the age rules.
    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Get the flow name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the question under the cursor.
    pub fn current_question(&self) -> &Question {
        &self.questions[self.cursor]
    }

    /// Get the cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Get the current length of the question sequence.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the sequence has no questions. Always false by construction.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Get the full question sequence, including spliced follow-ups.
    pub fn question_list(&self) -> &[Question] {
        &self.questions
    }

    /// Whether the cursor has advanced off the last question.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Get the terminal behavior configured for this flow.
    pub fn terminal_behavior(&self) -> Terminal {
        self.terminal
    }

    /// Get the durable answer summary.
    pub fn answers(&self) -> &AnswersSummary {
        &self.summary
    }

    /// Get the in-progress selection for the current question.
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Get the in-progress free-text answer.
    pub fn free_text(&self) -> &str {
        &self.free_text
    }

    /// Get the in-progress custom ("Other") answer.
    pub fn custom_answer(&self) -> &str {
        &self.custom_answer
    }

    /// Get the active alert, if a branch rule blocked the last transition.
    pub fn active_alert(&self) -> Option<Alert> {
        self.active_alert
    }

    /// Clear the active alert. Called when the presentation layer dismisses
    /// the modal; the engine never clears it on its own.
    pub fn dismiss_alert(&mut self) {
        self.active_alert = None;
    }

    /// Replace the selection with a single value.
    pub fn select(&mut self, value: impl Into<String>) {
        self.selected.clear();
        self.selected.push(value.into());
    }

    /// Toggle a value in the selection, preserving selection order.
    pub fn toggle(&mut self, value: impl Into<String>) {
        let value = value.into();
        if let Some(position) = self.selected.iter().position(|v| *v == value) {
            self.selected.remove(position);
        } else {
            self.selected.push(value);
        }
    }

    /// Set the free-text answer. Callers update this on every edit so the
    /// engine, not a UI binding, is the source of truth.
    pub fn set_free_text(&mut self, text: impl Into<String>) {
        self.free_text = text.into();
    }

    /// Set the custom ("Other, please specify") answer. When non-empty it
    /// takes precedence over the selection at commit time.
    pub fn set_custom_answer(&mut self, text: impl Into<String>) {
        self.custom_answer = text.into();
    }

    /// The validation gate: whether the continue affordance is enabled for
    /// the current question.
    pub fn can_advance(&self) -> bool {
        match self.current_question().shape() {
            AnswerShape::FreeText => !self.free_text.is_empty(),
            AnswerShape::SingleChoice { .. } | AnswerShape::MultiChoice { .. } => {
                !self.selected.is_empty() || !self.custom_answer.is_empty()
            }
            AnswerShape::ExternalLink { .. } => true,
        }
    }

    /// Move forward one transition.
    ///
    /// In strict order: commit the current answer into the summary, evaluate
    /// branch rules (first match wins), then apply the rule's action or the
    /// default transition. A [`Step::Blocked`] outcome leaves the cursor and
    /// the ephemeral answer fields untouched so the user can correct the
    /// answer and retry.
    pub fn advance(&mut self) -> Step {
        if self.completed {
            return Step::Completed;
        }

        let prompt = self.current_question().prompt().to_string();
        let committed = self.current_answer();
        self.summary.record(prompt.clone(), committed.clone());

        let matched = self.rules.iter().enumerate().position(|(index, rule)| {
            rule.trigger() == prompt
                && !(self.fired[index]
                    && matches!(rule.action(), BranchAction::InsertFollowUps(_)))
                && rule.when().evaluate(&committed, &self.summary, self.today)
        });

        let step = match matched.map(|index| (index, self.rules[index].action().clone())) {
            Some((index, BranchAction::InsertFollowUps(follow_ups))) => {
                self.fired[index] = true;
                self.questions
                    .splice(self.cursor + 1..self.cursor + 1, follow_ups);
                self.cursor += 1;
                self.clear_ephemeral();
                Step::Moved
            }
            Some((_, BranchAction::SkipNext(count))) => {
                self.cursor = (self.cursor + 1 + count).min(self.questions.len() - 1);
                self.clear_ephemeral();
                Step::Moved
            }
            Some((_, BranchAction::Block(alert))) => {
                self.active_alert = Some(alert);
                Step::Blocked(alert)
            }
            None => {
                if self.cursor < self.questions.len() - 1 {
                    self.cursor += 1;
                    self.clear_ephemeral();
                    Step::Moved
                } else {
                    self.completed = true;
                    self.clear_ephemeral();
                    Step::Completed
                }
            }
        };

        debug_assert!(self.cursor < self.questions.len());
        step
    }

    /// Move back one question. A no-op at the first question. From the
    /// completed state, returns to the last question. The durable summary is
    /// never touched, so prior answers survive for a caller that wants to
    /// pre-fill.
    pub fn retreat(&mut self) {
        if self.completed {
            self.completed = false;
            self.clear_ephemeral();
            return;
        }
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        self.clear_ephemeral();
        debug_assert!(self.cursor < self.questions.len());
    }

    /// The answer that would be committed for the current question right
    /// now: a non-empty custom answer wins, then the free-text field for
    /// free-text questions, then the selection.
    fn current_answer(&self) -> Vec<String> {
        if !self.custom_answer.is_empty() {
            vec![self.custom_answer.clone()]
        } else if matches!(self.current_question().shape(), AnswerShape::FreeText) {
            vec![self.free_text.clone()]
        } else {
            self.selected.clone()
        }
    }

    fn clear_ephemeral(&mut self) {
        self.selected.clear();
        self.custom_answer.clear();
        self.free_text.clear();
    }
}

fn check_options(question: &Question) -> Result<(), FlowError> {
    if let Some(options) = question.shape().options()
        && options.is_empty()
    {
        return Err(FlowError::EmptyOptions(question.prompt().to_string()));
    }
    Ok(())
}
