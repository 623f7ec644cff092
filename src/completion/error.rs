use thiserror::Error;

/// Failures of a single completion round-trip.
///
/// The turn controller treats every variant the same way; the split only
/// exists so the log line says what went wrong.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("failed to reach completion endpoint {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("completion request failed with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("malformed completion response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("completion response has no message content")]
    MissingContent,
}
