use chrono::{DateTime, Utc};
use serde::Serialize;

/// Failure category carried inside the envelope
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// A generated candidate selector no longer resolves in the DOM
    SelectorNotFound,
    /// Reading text content of a matched node threw
    ExtractionFailed,
}

/// Uniform context attached to every failed search.
///
/// Serialized as-is into the JSON error output so callers get the template,
/// target, page URL, and how far the search got before it aborted.
#[derive(Debug, Clone, Serialize)]
pub struct FailureEnvelope {
    pub kind: FailureKind,
    pub timestamp: DateTime<Utc>,
    pub template: String,
    pub target_value: String,
    pub page_url: String,
    /// The selector the search was probing when it failed
    pub last_selector: String,
    pub candidates_tried: u64,
    pub message: String,
}

/// Custom error type that includes exit codes
#[derive(Debug, thiserror::Error)]
pub enum ScoutError {
    /// Candidate selector not found in the DOM (exit code 2)
    #[error("No element found matching selector: {}", .0.last_selector)]
    SelectorNotFound(FailureEnvelope),
    /// Text extraction threw mid-read (exit code 3)
    #[error("Failed to read text of '{}': {}", .0.last_selector, .0.message)]
    ExtractionFailed(FailureEnvelope),
    /// WebDriver connection failed (exit code 4)
    #[error("WebDriver connection failed: {0}")]
    WebDriverFailed(String),
    /// Operation attempted on a closed session (exit code 5)
    #[error("Browsing session is already closed")]
    SessionClosed,
    /// Generic error (exit code 1)
    #[error("{0}")]
    Other(anyhow::Error),
}

impl From<anyhow::Error> for ScoutError {
    fn from(err: anyhow::Error) -> Self {
        // Recover the typed error when one was wrapped along the way
        let err = match err.downcast::<ScoutError>() {
            Ok(scout_err) => return scout_err,
            Err(err) => err,
        };

        let msg = err.to_string();
        if msg.contains("Cannot connect to")
            || msg.contains("Failed to connect to WebDriver")
            || msg.contains("geckodriver")
            || msg.contains("chromedriver")
        {
            ScoutError::WebDriverFailed(msg)
        } else {
            ScoutError::Other(err)
        }
    }
}

impl ScoutError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ScoutError::SelectorNotFound(_) => 2,
            ScoutError::ExtractionFailed(_) => 3,
            ScoutError::WebDriverFailed(_) => 4,
            ScoutError::SessionClosed => 5,
            ScoutError::Other(_) => 1,
        }
    }

    /// The structured envelope, when this error carries one
    pub fn envelope(&self) -> Option<&FailureEnvelope> {
        match self {
            ScoutError::SelectorNotFound(env) | ScoutError::ExtractionFailed(env) => Some(env),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "errors_test.rs"]
mod errors_test;
