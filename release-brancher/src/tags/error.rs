//! Tag lookup error types.

use crate::github::ApiError;
use thiserror::Error;

/// Errors that can occur while resolving the latest release tag.
#[derive(Debug, Error)]
pub enum TagError {
    /// Listing tags failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// No tag carries the configured prefix.
    #[error("No tags found matching '{prefix}' pattern.")]
    NoMatchingTag { prefix: String },
}
