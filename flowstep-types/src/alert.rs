use std::fmt;

/// A blocking condition raised during forward navigation.
///
/// The presentation layer observes the engine's active alert and renders it
/// as a modal; the engine clears it only when the presentation layer
/// acknowledges dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alert {
    /// The supplied date of birth is below the flow's minimum age,
    /// or the date picker was never touched.
    AgeRestriction,

    /// The citizenship/residency answers indicate the user is not eligible.
    EligibilityRestriction,
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AgeRestriction => write!(f, "age restriction"),
            Self::EligibilityRestriction => write!(f, "eligibility restriction"),
        }
    }
}
