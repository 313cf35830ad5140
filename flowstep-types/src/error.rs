/// Error type for flow construction.
///
/// These are programmer errors in a flow template; a well-formed template
/// never produces them at runtime.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    /// A flow template must contain at least one question.
    #[error("Flow template '{0}' has no questions")]
    EmptyTemplate(String),

    /// A reachable choice question must offer at least one option.
    #[error("Question '{0}' is a choice question with no options")]
    EmptyOptions(String),

    /// A follow-up insertion must contribute at least one question, or the
    /// cursor could step past the end of the sequence.
    #[error("Branch rule on '{0}' inserts an empty follow-up list")]
    EmptyFollowUps(String),
}
