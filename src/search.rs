use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info, warn};

use crate::errors::{FailureEnvelope, FailureKind, ScoutError};
use crate::generators::GeneratorKind;
use crate::template;
use crate::types::SearchMatch;

/// The DOM query surface the search loop runs against.
///
/// `Browser` implements this over WebDriver; tests implement it over an
/// in-memory page. One probe backs at most one search at a time.
#[async_trait]
pub trait DomProbe {
    /// True iff exactly one node matches the selector. May fail if the
    /// underlying query throws.
    async fn query_exists(&self, selector: &str) -> Result<bool>;
    /// Text content of the matched node; empty string when it has none.
    async fn query_text_content(&self, selector: &str) -> Result<String>;
    /// Current page URL, for error context.
    async fn current_url(&self) -> Result<String>;
    /// Tear down the browsing session. Expected to be idempotent.
    async fn close_session(&self) -> Result<()>;
}

/// One selector search: template, placeholder token, value generator, and
/// the text to look for
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub template: String,
    pub placeholder: String,
    pub generator: GeneratorKind,
    pub target: String,
}

/// Probe the DOM with generated candidate selectors until one matches.
///
/// Each iteration pulls the next value from a fresh generator stream,
/// expands the template into a candidate selector, requires the candidate
/// to exist, reads its text, and compares it case-insensitively against the
/// target (substring match). The first matching candidate in generator
/// order wins; there is no backtracking and no iteration cap, so the loop
/// ends only on a match or on the first candidate that fails to resolve.
///
/// Any checker or extractor failure is terminal: the session is closed
/// defensively and the error carries the full search context.
pub async fn search_until_match<P: DomProbe + Sync>(
    probe: &P,
    request: &SearchRequest,
) -> Result<SearchMatch, ScoutError> {
    let needle = request.target.to_lowercase();
    let mut candidates_tried: u64 = 0;

    // Fresh stream per call; the cursor never resets mid-search
    for value in request.generator.stream() {
        let candidate = template::expand(&request.template, &request.placeholder, value);
        candidates_tried += 1;

        debug!(
            "Probing candidate #{}: {} (value {})",
            candidates_tried, candidate, value
        );

        match probe.query_exists(&candidate).await {
            Ok(true) => {}
            Ok(false) => {
                return Err(abort(
                    probe,
                    FailureKind::SelectorNotFound,
                    request,
                    &candidate,
                    candidates_tried,
                    format!("no element matched '{}'", candidate),
                )
                .await);
            }
            Err(e) => {
                return Err(abort(
                    probe,
                    FailureKind::SelectorNotFound,
                    request,
                    &candidate,
                    candidates_tried,
                    format!("existence query for '{}' failed: {}", candidate, e),
                )
                .await);
            }
        }

        let text = match probe.query_text_content(&candidate).await {
            Ok(text) => text,
            Err(e) => {
                return Err(abort(
                    probe,
                    FailureKind::ExtractionFailed,
                    request,
                    &candidate,
                    candidates_tried,
                    e.to_string(),
                )
                .await);
            }
        };

        if text.to_lowercase().contains(&needle) {
            info!(
                "Matched '{}' in {} after {} candidate(s)",
                request.target, candidate, candidates_tried
            );
            return Ok(SearchMatch {
                selector: candidate,
                candidates_tried,
            });
        }
    }

    unreachable!("number streams are infinite")
}

/// Build the terminal error for a failed search and defensively close the
/// session. Close errors are logged, not propagated; the search failure is
/// the one the caller needs to see.
async fn abort<P: DomProbe + Sync>(
    probe: &P,
    kind: FailureKind,
    request: &SearchRequest,
    last_selector: &str,
    candidates_tried: u64,
    message: String,
) -> ScoutError {
    let page_url = probe
        .current_url()
        .await
        .unwrap_or_else(|_| "unknown".to_string());

    warn!(
        "Search for '{}' aborted at {} ({}): {}",
        request.target, last_selector, page_url, message
    );

    if let Err(e) = probe.close_session().await {
        warn!("Failed to close session after search failure: {}", e);
    }

    let envelope = FailureEnvelope {
        kind,
        timestamp: Utc::now(),
        template: request.template.clone(),
        target_value: request.target.clone(),
        page_url,
        last_selector: last_selector.to_string(),
        candidates_tried,
        message,
    };

    match kind {
        FailureKind::SelectorNotFound => ScoutError::SelectorNotFound(envelope),
        FailureKind::ExtractionFailed => ScoutError::ExtractionFailed(envelope),
    }
}

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;
