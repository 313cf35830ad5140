//! Generic signup.
//!
//! The lightest flow: a 13-year age gate (not 18 - the threshold is per-flow
//! configuration), an "Other" escape hatch on the referral question, and a
//! terms-of-service acknowledgment. Ends on a summary screen.

use flowstep::{Alert, BranchAction, BranchRule, FlowTemplate, Predicate, Question, Terminal};
use flowstep_submit::PayloadMapping;

pub const NAME: &str = "What is your name?";
pub const DATE_OF_BIRTH: &str = "What is your date of birth?";
pub const REFERRAL: &str = "How did you hear about us?";
pub const TERMS: &str = "Please review the terms of service";

pub fn template() -> FlowTemplate {
    FlowTemplate::new("signup")
        .question(Question::free_text(NAME))
        .question(Question::free_text(DATE_OF_BIRTH))
        .question(Question::single_choice(
            REFERRAL,
            ["A friend", "Social media", "Search", "Other"],
        ))
        .question(Question::external_link(
            TERMS,
            "https://example.com/terms",
        ))
        .rule(BranchRule::new(
            DATE_OF_BIRTH,
            Predicate::UnderAge { min_years: 13 },
            BranchAction::Block(Alert::AgeRestriction),
        ))
        .terminal(Terminal::Summary)
}

pub fn mapping() -> PayloadMapping {
    PayloadMapping::new()
        .scalar_field(NAME, "name")
        .scalar_field(DATE_OF_BIRTH, "date_of_birth")
        .scalar_field(REFERRAL, "referral_source")
}
