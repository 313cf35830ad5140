//! Brokerage account onboarding.
//!
//! The strictest of the four flows: an 18-year age gate on the date of
//! birth, a citizenship/residency eligibility gate, and follow-up
//! subsequences for users who report a controlling position or political
//! exposure.

use flowstep::{Alert, BranchAction, BranchRule, FlowTemplate, Predicate, Question, Terminal};
use flowstep_submit::PayloadMapping;

pub const DATE_OF_BIRTH: &str = "What is your date of birth?";
pub const CITIZEN: &str = "Are you a US Citizen?";
pub const RESIDENT: &str = "Are you a permanent US resident?";
pub const EMPLOYMENT: &str = "What is your employment status?";
pub const CONTROLLING_POSITION: &str =
    "Are you a director or 10% shareholder of a publicly traded company?";
pub const CONTROLLING_COMPANY: &str = "Which company?";
pub const POLITICALLY_EXPOSED: &str =
    "Are you or an immediate family member a politically exposed person?";
pub const EXPOSED_NAME: &str = "Name of the politically exposed person";
pub const EXPOSED_ROLE: &str = "Their political role or office";
pub const DISCLOSURES: &str = "Please review the account disclosures";

pub fn template() -> FlowTemplate {
    FlowTemplate::new("brokerage-onboarding")
        .question(Question::free_text(DATE_OF_BIRTH))
        .question(Question::single_choice(CITIZEN, ["Yes", "No"]))
        .question(Question::single_choice(RESIDENT, ["Yes", "No"]))
        .question(Question::single_choice(
            EMPLOYMENT,
            ["Employed", "Self-employed", "Retired", "Student", "Unemployed"],
        ))
        .question(Question::single_choice(CONTROLLING_POSITION, ["Yes", "No"]))
        .question(Question::single_choice(POLITICALLY_EXPOSED, ["Yes", "No"]))
        .question(Question::external_link(
            DISCLOSURES,
            "https://example.com/brokerage/disclosures",
        ))
        .rule(BranchRule::new(
            DATE_OF_BIRTH,
            Predicate::UnderAge { min_years: 18 },
            BranchAction::Block(Alert::AgeRestriction),
        ))
        .rule(BranchRule::new(
            RESIDENT,
            Predicate::All(vec![
                Predicate::AnswerIs("No".into()),
                Predicate::PriorAnswerIs {
                    prompt: CITIZEN.into(),
                    value: "No".into(),
                },
            ]),
            BranchAction::Block(Alert::EligibilityRestriction),
        ))
        .rule(BranchRule::new(
            CONTROLLING_POSITION,
            Predicate::AnswerIs("Yes".into()),
            BranchAction::InsertFollowUps(vec![Question::free_text(CONTROLLING_COMPANY)]),
        ))
        .rule(BranchRule::new(
            POLITICALLY_EXPOSED,
            Predicate::AnswerIs("Yes".into()),
            BranchAction::InsertFollowUps(vec![
                Question::free_text(EXPOSED_NAME),
                Question::free_text(EXPOSED_ROLE),
            ]),
        ))
        .terminal(Terminal::Summary)
}

pub fn mapping() -> PayloadMapping {
    PayloadMapping::new()
        .with_root("brokerageApplication")
        .scalar_field(DATE_OF_BIRTH, "date_of_birth")
        .scalar_field(CITIZEN, "us_citizen")
        .scalar_field(RESIDENT, "permanent_resident")
        .scalar_field(EMPLOYMENT, "employment_status")
        .scalar_field(CONTROLLING_POSITION, "controlling_position")
        .scalar_field(CONTROLLING_COMPANY, "controlling_company")
        .scalar_field(POLITICALLY_EXPOSED, "politically_exposed")
        .scalar_field(EXPOSED_NAME, "exposed_person_name")
        .scalar_field(EXPOSED_ROLE, "exposed_person_role")
}
