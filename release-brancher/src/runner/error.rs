//! Runner error types.

use crate::config::ConfigError;
use crate::github::ApiError;
use crate::pull_requests::PrError;
use crate::tags::TagError;
use crate::templates::TemplateError;

/// Errors that stop a run before any repository is processed.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration loading errors.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// Branch or pull request formats failed to compile.
    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// Errors that stop processing of a single repository.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Resolving the latest release tag failed.
    #[error(transparent)]
    Tag(#[from] TagError),

    /// A read call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The branch name or pull request text could not be rendered.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Creating the branch or pull request failed.
    #[error(transparent)]
    PullRequest(#[from] PrError),
}
