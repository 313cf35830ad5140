//! Core types for the flowstep crate.
//!
//! This crate provides the foundational types for defining questionnaire flows:
//! - `Question` and `AnswerShape` - Individual questions and their answer kinds
//! - `AnswersSummary` - The durable per-flow record of committed answers
//! - `Alert` - Blocking conditions surfaced to the presentation layer
//! - `FlowError` - Construction-time validation failures

mod question;
pub use question::{AnswerShape, Question};

mod summary;
pub use summary::AnswersSummary;

mod alert;
pub use alert::Alert;

mod error;
pub use error::FlowError;
