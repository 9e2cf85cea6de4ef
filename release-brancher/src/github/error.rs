//! GitHub API error types.

use thiserror::Error;

/// Errors returned by [`GitHubClient`](super::GitHubClient) calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A REST call returned a non-success status or could not be sent.
    #[error("Could not {operation}: {detail}")]
    Request {
        /// Human-readable description of the call.
        operation: String,

        /// One-line description of what went wrong.
        detail: String,

        #[source]
        source: octocrab::Error,
    },
}

impl ApiError {
    pub(crate) fn request(operation: impl Into<String>, source: octocrab::Error) -> Self {
        Self::Request {
            operation: operation.into(),
            detail: describe(&source),
            source,
        }
    }

    /// Returns the HTTP status code reported by GitHub, if any.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Request { source, .. } => status_code(source),
        }
    }
}

/// Extracts the HTTP status of a GitHub error response.
pub(crate) fn status_code(error: &octocrab::Error) -> Option<u16> {
    match error {
        octocrab::Error::GitHub { source, .. } => Some(source.status_code.as_u16()),
        _ => None,
    }
}

/// Summarises an octocrab error on a single line.
///
/// GitHub error responses become `<status>: <message>`. Other errors keep the
/// first line of their message; the rest is a captured backtrace.
fn describe(error: &octocrab::Error) -> String {
    match error {
        octocrab::Error::GitHub { source, .. } => {
            format!("{}: {}", source.status_code.as_u16(), source.message.trim())
        }
        other => other
            .to_string()
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("unknown error")
            .to_string(),
    }
}
