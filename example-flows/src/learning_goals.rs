//! Learning-goals assessment.
//!
//! Students skip the work-schedule question; everyone else answers it.

use flowstep::{BranchAction, BranchRule, FlowTemplate, Predicate, Question, Terminal};
use flowstep_submit::PayloadMapping;

pub const TOPICS: &str = "Which topics do you want to learn about?";
pub const EXPERIENCE: &str = "How much investing experience do you have?";
pub const IS_STUDENT: &str = "Are you currently a student?";
pub const WORK_SCHEDULE: &str = "How many hours per week do you work?";
pub const PACE: &str = "How quickly do you want to move through the material?";

pub fn template() -> FlowTemplate {
    FlowTemplate::new("learning-goals")
        .question(Question::multi_choice(
            TOPICS,
            [
                "Budgeting",
                "Stock market basics",
                "Retirement accounts",
                "Taxes",
                "Crypto",
            ],
        ))
        .question(Question::single_choice(
            EXPERIENCE,
            ["None", "A little", "Comfortable", "Advanced"],
        ))
        .question(Question::single_choice(IS_STUDENT, ["Yes", "No"]))
        .question(Question::single_choice(
            WORK_SCHEDULE,
            ["Under 20", "20-40", "Over 40"],
        ))
        .question(Question::single_choice(
            PACE,
            ["A few minutes a day", "A lesson a week", "As fast as possible"],
        ))
        .rule(BranchRule::new(
            IS_STUDENT,
            Predicate::AnswerIs("Yes".into()),
            BranchAction::SkipNext(1),
        ))
        .terminal(Terminal::Submit)
}

pub fn mapping() -> PayloadMapping {
    PayloadMapping::new()
        .with_root("learningGoals")
        .field(TOPICS, "topics")
        .scalar_field(EXPERIENCE, "experience_level")
        .scalar_field(IS_STUDENT, "is_student")
        .scalar_field(WORK_SCHEDULE, "work_schedule")
        .scalar_field(PACE, "pace")
}
