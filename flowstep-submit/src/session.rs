use std::sync::Arc;

use flowstep::{FlowEngine, Step, Terminal};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::{PayloadMapping, ProfileSource, SubmitError, Submitter};

/// One active flow screen: the engine plus its submission collaborators.
///
/// The session owns the in-flight submission task. Dropping the session
/// aborts it, so a completion handler can never fire against a flow that has
/// already been dismissed. Re-submitting aborts the previous attempt and
/// re-runs the whole fetch-compile-submit sequence.
///
/// `submit` spawns onto the ambient tokio runtime, so the session must live
/// inside one.
pub struct FlowSession {
    engine: FlowEngine,
    mapping: PayloadMapping,
    submitter: Arc<dyn Submitter>,
    profile_source: Option<Arc<dyn ProfileSource>>,
    in_flight: Option<JoinHandle<Result<(), SubmitError>>>,
}

impl FlowSession {
    /// Create a session from an engine, a payload mapping, and a submitter.
    pub fn new(engine: FlowEngine, mapping: PayloadMapping, submitter: Arc<dyn Submitter>) -> Self {
        Self {
            engine,
            mapping,
            submitter,
            profile_source: None,
            in_flight: None,
        }
    }

    /// Fetch profile context from this source before compiling the payload.
    /// If the fetch fails, the submission request is not attempted.
    #[must_use]
    pub fn with_profile_source(mut self, source: Arc<dyn ProfileSource>) -> Self {
        self.profile_source = Some(source);
        self
    }

    /// Get the engine.
    pub fn engine(&self) -> &FlowEngine {
        &self.engine
    }

    /// Get the engine mutably, for answer input.
    pub fn engine_mut(&mut self) -> &mut FlowEngine {
        &mut self.engine
    }

    /// Advance the engine. For flows configured with [`Terminal::Submit`],
    /// completing the last question kicks off submission directly.
    pub fn advance(&mut self) -> Step {
        let step = self.engine.advance();
        if step == Step::Completed && self.engine.terminal_behavior() == Terminal::Submit {
            self.submit();
        }
        step
    }

    /// Retreat the engine.
    pub fn retreat(&mut self) {
        self.engine.retreat();
    }

    /// Start a submission attempt: optional profile read, then compile, then
    /// one POST. Any previous attempt still in flight is aborted first.
    pub fn submit(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }

        let flow = self.engine.name().to_string();
        let summary = self.engine.answers().clone();
        let mapping = self.mapping.clone();
        let submitter = Arc::clone(&self.submitter);
        let profile_source = self.profile_source.clone();

        self.in_flight = Some(tokio::spawn(async move {
            let profile = match &profile_source {
                Some(source) => match source.fetch().await {
                    Ok(profile) => Some(profile),
                    Err(error) => {
                        warn!(%flow, %error, "profile read failed, submission not attempted");
                        return Err(error);
                    }
                },
                None => None,
            };

            let payload = mapping.compile(&summary, profile.as_ref());
            match submitter.submit(&payload).await {
                Ok(()) => {
                    debug!(%flow, "flow submitted");
                    Ok(())
                }
                Err(error) => {
                    warn!(%flow, %error, "flow submission failed");
                    Err(error)
                }
            }
        }));
    }

    /// Whether a submission attempt is currently in flight.
    pub fn is_submitting(&self) -> bool {
        self.in_flight
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Wait for the current submission attempt, if any, and take its result.
    pub async fn await_submission(&mut self) -> Option<Result<(), SubmitError>> {
        let handle = self.in_flight.take()?;
        Some(handle.await.unwrap_or(Err(SubmitError::Cancelled)))
    }
}

impl Drop for FlowSession {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}
