//! Test doubles for exercising flows without network access.
//!
//! `TestSubmitter` captures every payload handed to it so tests can assert
//! on the compiled shape; `TestProfileSource` serves a canned profile.
//! Either can be flipped into a failing mode to drive the error paths.

use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

use crate::{ProfileContext, ProfileSource, SubmitError, Submitter};

/// A submitter that records payloads in memory.
#[derive(Debug, Default)]
pub struct TestSubmitter {
    payloads: Mutex<Vec<Value>>,
    fail: bool,
}

impl TestSubmitter {
    /// Create a submitter that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a submitter that rejects everything with a 500 status.
    pub fn failing() -> Self {
        Self {
            payloads: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Get all payloads submitted so far.
    pub fn payloads(&self) -> Vec<Value> {
        self.payloads.lock().unwrap().clone()
    }
}

#[async_trait]
impl Submitter for TestSubmitter {
    async fn submit(&self, payload: &Value) -> Result<(), SubmitError> {
        if self.fail {
            return Err(SubmitError::UnexpectedStatus(
                StatusCode::INTERNAL_SERVER_ERROR,
            ));
        }
        self.payloads.lock().unwrap().push(payload.clone());
        Ok(())
    }
}

/// A profile source that serves a canned profile, or fails.
#[derive(Debug)]
pub struct TestProfileSource {
    profile: ProfileContext,
    fail: bool,
}

impl TestProfileSource {
    /// Serve the given profile.
    pub fn new(profile: ProfileContext) -> Self {
        Self {
            profile,
            fail: false,
        }
    }

    /// Fail every fetch with a 500 status.
    pub fn failing() -> Self {
        Self {
            profile: ProfileContext::new("", ""),
            fail: true,
        }
    }
}

#[async_trait]
impl ProfileSource for TestProfileSource {
    async fn fetch(&self) -> Result<ProfileContext, SubmitError> {
        if self.fail {
            return Err(SubmitError::UnexpectedStatus(
                StatusCode::INTERNAL_SERVER_ERROR,
            ));
        }
        Ok(self.profile.clone())
    }
}
