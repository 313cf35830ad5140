use chrono::NaiveDate;
use flowstep_types::{Alert, AnswersSummary, Question};

/// A predicate-action pair evaluated during forward navigation.
///
/// Rules are tried in declaration order when `advance()` is called on their
/// trigger question; the first rule whose predicate holds wins, and at most
/// one rule fires per `advance()`.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchRule {
    /// The prompt of the question this rule triggers on.
    trigger: String,

    /// The condition over the in-progress answer and the committed summary.
    when: Predicate,

    /// What happens when the condition holds.
    action: BranchAction,
}

impl BranchRule {
    /// Create a new branch rule.
    pub fn new(trigger: impl Into<String>, when: Predicate, action: BranchAction) -> Self {
        Self {
            trigger: trigger.into(),
            when,
            action,
        }
    }

    /// Get the trigger prompt.
    pub fn trigger(&self) -> &str {
        &self.trigger
    }

    /// Get the predicate.
    pub fn when(&self) -> &Predicate {
        &self.when
    }

    /// Get the action.
    pub fn action(&self) -> &BranchAction {
        &self.action
    }
}

/// The action taken when a branch rule fires.
#[derive(Debug, Clone, PartialEq)]
pub enum BranchAction {
    /// Splice follow-up questions into the sequence immediately after the
    /// triggering question, then advance into them.
    InsertFollowUps(Vec<Question>),

    /// Advance past the next `n` questions (bounded by the last question).
    SkipNext(usize),

    /// Keep the cursor in place and surface an alert.
    Block(Alert),
}

/// A condition over the current selection and the committed answer summary.
///
/// Predicates are plain data so flow templates stay declarative; the
/// combinators cover the cross-question checks (e.g. eligibility depends on
/// both the citizenship and residency answers).
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// The selection is exactly one answer equal to the given value.
    AnswerIs(String),

    /// Any selected answer equals the given value.
    AnswerContains(String),

    /// The selection is non-empty and no selected answer equals the value.
    AnswerLacks(String),

    /// A previously committed answer for another prompt equals the value.
    PriorAnswerIs { prompt: String, value: String },

    /// The selected answer, parsed as an ISO `%Y-%m-%d` date of birth, gives
    /// a whole-year age below `min_years`. Also holds when the date equals
    /// "today" (an untouched date picker) or cannot be parsed at all.
    UnderAge { min_years: u32 },

    /// All sub-predicates hold.
    All(Vec<Predicate>),

    /// At least one sub-predicate holds.
    Any(Vec<Predicate>),
}

impl Predicate {
    /// Evaluate this predicate against the in-progress selection, the
    /// committed summary, and the engine's notion of "today".
    pub fn evaluate(&self, selected: &[String], summary: &AnswersSummary, today: NaiveDate) -> bool {
        match self {
            Self::AnswerIs(value) => selected.len() == 1 && selected[0] == *value,
            Self::AnswerContains(value) => selected.iter().any(|answer| answer == value),
            Self::AnswerLacks(value) => {
                !selected.is_empty() && selected.iter().all(|answer| answer != value)
            }
            Self::PriorAnswerIs { prompt, value } => summary.first(prompt) == Some(value.as_str()),
            Self::UnderAge { min_years } => under_age(selected.first(), *min_years, today),
            Self::All(predicates) => predicates
                .iter()
                .all(|p| p.evaluate(selected, summary, today)),
            Self::Any(predicates) => predicates
                .iter()
                .any(|p| p.evaluate(selected, summary, today)),
        }
    }
}

/// Whole-year age check for the date-of-birth rules.
///
/// A date equal to today means the picker was never touched, and an
/// unparseable or missing date means there is no usable answer; both are
/// treated as under-age so the gate blocks.
fn under_age(answer: Option<&String>, min_years: u32, today: NaiveDate) -> bool {
    let Some(raw) = answer else {
        return true;
    };
    let Ok(birth_date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") else {
        return true;
    };
    if birth_date == today {
        return true;
    }
    match today.years_since(birth_date) {
        Some(age) => age < min_years,
        // Birth date in the future.
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()
    }

    fn selection(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn answer_is_requires_exact_single_selection() {
        let p = Predicate::AnswerIs("No".into());
        let summary = AnswersSummary::new();

        assert!(p.evaluate(&selection(&["No"]), &summary, today()));
        assert!(!p.evaluate(&selection(&["Yes"]), &summary, today()));
        assert!(!p.evaluate(&selection(&["No", "Yes"]), &summary, today()));
        assert!(!p.evaluate(&[], &summary, today()));
    }

    #[test]
    fn answer_contains_and_lacks() {
        let summary = AnswersSummary::new();
        let contains = Predicate::AnswerContains("Stocks".into());
        let lacks = Predicate::AnswerLacks("Stocks".into());

        let picked = selection(&["Bonds", "Stocks"]);
        assert!(contains.evaluate(&picked, &summary, today()));
        assert!(!lacks.evaluate(&picked, &summary, today()));

        let other = selection(&["Bonds"]);
        assert!(!contains.evaluate(&other, &summary, today()));
        assert!(lacks.evaluate(&other, &summary, today()));

        // An empty selection lacks nothing - there is no answer to judge.
        assert!(!lacks.evaluate(&[], &summary, today()));
    }

    #[test]
    fn prior_answer_reads_summary() {
        let mut summary = AnswersSummary::new();
        summary.record("Are you a US Citizen?", vec!["No".to_string()]);

        let p = Predicate::PriorAnswerIs {
            prompt: "Are you a US Citizen?".into(),
            value: "No".into(),
        };
        assert!(p.evaluate(&[], &summary, today()));

        let q = Predicate::PriorAnswerIs {
            prompt: "Are you a US Citizen?".into(),
            value: "Yes".into(),
        };
        assert!(!q.evaluate(&[], &summary, today()));
    }

    #[test]
    fn under_age_boundary() {
        let summary = AnswersSummary::new();
        let p = Predicate::UnderAge { min_years: 18 };

        // Exactly 18 today: passes.
        assert!(!p.evaluate(&selection(&["2008-06-15"]), &summary, today()));
        // 18 years minus one day: blocks.
        assert!(p.evaluate(&selection(&["2008-06-16"]), &summary, today()));
    }

    #[test]
    fn under_age_today_means_unset() {
        let summary = AnswersSummary::new();
        let p = Predicate::UnderAge { min_years: 18 };
        assert!(p.evaluate(&selection(&["2026-06-15"]), &summary, today()));
    }

    #[test]
    fn under_age_rejects_garbage_and_future_dates() {
        let summary = AnswersSummary::new();
        let p = Predicate::UnderAge { min_years: 18 };
        assert!(p.evaluate(&selection(&["not-a-date"]), &summary, today()));
        assert!(p.evaluate(&selection(&["2030-01-01"]), &summary, today()));
        assert!(p.evaluate(&[], &summary, today()));
    }

    #[test]
    fn combinators() {
        let mut summary = AnswersSummary::new();
        summary.record("Citizen", vec!["No".to_string()]);

        let both = Predicate::All(vec![
            Predicate::AnswerIs("No".into()),
            Predicate::PriorAnswerIs {
                prompt: "Citizen".into(),
                value: "No".into(),
            },
        ]);
        assert!(both.evaluate(&selection(&["No"]), &summary, today()));
        assert!(!both.evaluate(&selection(&["Yes"]), &summary, today()));

        let either = Predicate::Any(vec![
            Predicate::AnswerIs("Yes".into()),
            Predicate::AnswerIs("No".into()),
        ]);
        assert!(either.evaluate(&selection(&["Yes"]), &summary, today()));
        assert!(!either.evaluate(&selection(&["Maybe"]), &summary, today()));
    }
}
