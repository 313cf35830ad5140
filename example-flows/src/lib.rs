//! Concrete flow templates built on the flowstep engine.
//!
//! Four flows that previously existed as near-duplicate implementations:
//! brokerage onboarding, the financial-goals assessment, the learning-goals
//! assessment, and generic signup. Each module exports its question template
//! and the payload mapping for its submission endpoint.

pub mod brokerage;
pub mod financial_goals;
pub mod learning_goals;
pub mod signup;
