//! Pull request error types.

use crate::github::ApiError;
use thiserror::Error;

/// Errors that can occur while opening a release pull request.
#[derive(Debug, Error)]
pub enum PrError {
    /// Creating the release branch failed; no pull request was attempted.
    #[error(transparent)]
    BranchCreation(ApiError),

    /// The branch exists but the pull request could not be opened.
    #[error(transparent)]
    PullRequest(ApiError),
}
