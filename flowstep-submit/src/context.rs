use serde::Deserialize;

/// Explicitly injected session state for outbound requests.
///
/// Replaces ambient globals (current auth session, persisted tokens): the
/// caller constructs one per signed-in session and hands it to the HTTP
/// collaborators at construction.
#[derive(Debug, Clone)]
pub struct SessionContext {
    base_url: String,
    bearer_token: Option<String>,
}

impl SessionContext {
    /// Create a context for the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            bearer_token: None,
        }
    }

    /// Attach a bearer token for authenticated endpoints.
    #[must_use]
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Get the bearer token, if any.
    pub fn bearer_token(&self) -> Option<&str> {
        self.bearer_token.as_deref()
    }

    /// Join a request path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Read-only profile record fetched before compiling a submission payload.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileContext {
    pub first_name: String,
    pub last_name: String,

    /// Nested goal summaries, passed through opaquely.
    #[serde(default)]
    pub financial_goals: Option<serde_json::Value>,

    #[serde(default)]
    pub learning_goals: Option<serde_json::Value>,
}

impl ProfileContext {
    /// Create a profile context with just a name, for tests and fixtures.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            financial_goals: None,
            learning_goals: None,
        }
    }
}
