use crate::utils::error::{Result, SubmissionError};
use std::env;

/// Environment variable that overrides any explicitly provided endpoint.
pub const ENDPOINT_ENV_VAR: &str = "HELPBRIDGE_BASE_URL";

/// Resolved service configuration. The base endpoint is fixed once here;
/// submission-time code never consults the environment again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    base_endpoint: String,
}

impl ServiceConfig {
    /// Resolve the base endpoint: the `HELPBRIDGE_BASE_URL` environment
    /// variable always wins, then the explicit argument. Fails with
    /// [`SubmissionError::MissingEndpoint`] when neither source is present.
    pub fn resolve(explicit: Option<&str>) -> Result<Self> {
        Self::from_sources(env::var(ENDPOINT_ENV_VAR).ok(), explicit)
    }

    /// Precedence logic split out as a pure function so it can be tested
    /// without mutating process state.
    pub fn from_sources(env_value: Option<String>, explicit: Option<&str>) -> Result<Self> {
        let base_endpoint = env_value
            .or_else(|| explicit.map(str::to_owned))
            .ok_or(SubmissionError::MissingEndpoint)?;
        Ok(Self { base_endpoint })
    }

    pub fn base_endpoint(&self) -> &str {
        &self.base_endpoint
    }
}
