//! # flowstep
//!
//! A reusable engine for dynamic, branching questionnaire flows.
//!
//! A flow is an ordered sequence of questions walked by a cursor. Answering a
//! question can conditionally splice follow-up questions into the sequence,
//! skip ahead, or block with an alert (age or eligibility restrictions).
//! Committed answers accumulate in a durable summary which a submission layer
//! compiles into a payload once the flow completes.
//!
//! ## Usage
//!
//! ```rust
//! use flowstep::{Alert, BranchAction, BranchRule, FlowEngine, FlowTemplate, Predicate, Question, Step};
//!
//! let template = FlowTemplate::new("signup")
//!     .question(Question::free_text("What is your name?"))
//!     .question(Question::single_choice("Are you a US Citizen?", ["Yes", "No"]))
//!     .rule(BranchRule::new(
//!         "Are you a US Citizen?",
//!         Predicate::AnswerIs("No".into()),
//!         BranchAction::Block(Alert::EligibilityRestriction),
//!     ));
//!
//! let mut engine = FlowEngine::new(template).unwrap();
//! engine.set_free_text("Alice");
//! assert!(engine.can_advance());
//! assert_eq!(engine.advance(), Step::Moved);
//!
//! engine.select("No");
//! assert_eq!(engine.advance(), Step::Blocked(Alert::EligibilityRestriction));
//! assert_eq!(engine.active_alert(), Some(Alert::EligibilityRestriction));
//! ```
//!
//! The engine is presentation-agnostic: it owns all answer state (including
//! the in-progress free-text value) and exposes the validation gate
//! ([`FlowEngine::can_advance`]) that drives the continue affordance.
//! Submission lives in the `flowstep-submit` crate.

// Re-export all types from flowstep-types
pub use flowstep_types::*;

mod rule;
pub use rule::{BranchAction, BranchRule, Predicate};

mod template;
pub use template::{FlowTemplate, Terminal};

mod engine;
pub use engine::{FlowEngine, Step};
