//! Submission layer for flowstep flows.
//!
//! Once a flow completes, its durable answer summary is compiled into a JSON
//! payload ([`PayloadMapping`]) and handed to a [`Submitter`] - over HTTP in
//! production ([`HttpSubmitter`]), or captured in memory for tests
//! ([`TestSubmitter`]). Flows that need external profile context fetch it
//! through a [`ProfileSource`] before compiling; a failed read aborts the
//! submission without attempting the write.
//!
//! [`FlowSession`] ties an engine, a mapping, and a submitter together and
//! scopes the in-flight request to the session's lifetime: dropping the
//! session aborts the request, so a dismissed flow can never be mutated by a
//! late completion.

mod context;
pub use context::{ProfileContext, SessionContext};

mod compile;
pub use compile::{FieldShape, PayloadMapping};

mod submit;
pub use submit::{HttpProfileReader, HttpSubmitter, ProfileSource, SubmitError, Submitter};

mod session;
pub use session::FlowSession;

// Test doubles for exercising flows without network access
mod test_submitter;
pub use test_submitter::{TestProfileSource, TestSubmitter};
