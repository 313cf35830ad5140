//! Financial-goals assessment.
//!
//! The only flow that reads external profile context before submitting; its
//! endpoint nests the answers under a `financialGoals` root key. No summary
//! screen: completing the last question submits directly.

use flowstep::{FlowTemplate, Question, Terminal};
use flowstep_submit::PayloadMapping;

pub const PRIMARY_REASON: &str = "What is your primary reason for investing?";
pub const TIME_HORIZON: &str = "When do you expect to need this money?";
pub const RISK_TOLERANCE: &str = "How would you describe your risk tolerance?";
pub const INCOME_REQUIRED: &str = "How much yearly income do you need from this portfolio?";
pub const INTEREST_SECTORS: &str = "Which sectors interest you?";

pub fn template() -> FlowTemplate {
    FlowTemplate::new("financial-goals")
        .question(Question::multi_choice(
            PRIMARY_REASON,
            [
                "Retirement",
                "Buying a home",
                "Education",
                "General wealth building",
            ],
        ))
        .question(Question::single_choice(
            TIME_HORIZON,
            ["Under 5 years", "5-10 years", "10-20 years", "20+ years"],
        ))
        .question(Question::single_choice(
            RISK_TOLERANCE,
            ["Conservative", "Moderate", "Aggressive"],
        ))
        .question(Question::free_text(INCOME_REQUIRED))
        .question(Question::multi_choice(
            INTEREST_SECTORS,
            ["Technology", "Healthcare", "Energy", "Real estate", "Finance"],
        ))
        .terminal(Terminal::Submit)
}

pub fn mapping() -> PayloadMapping {
    PayloadMapping::new()
        .with_root("financialGoals")
        .field(PRIMARY_REASON, "primary_reason")
        .field(TIME_HORIZON, "time_horizon")
        .field(RISK_TOLERANCE, "risk_tolerance")
        .scalar_field(INCOME_REQUIRED, "income_required")
        .field(INTEREST_SECTORS, "interest_sectors")
}
