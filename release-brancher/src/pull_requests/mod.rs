//! Release branch and pull request creation.
//!
//! The two mutating calls of a run live here: creating the release branch and
//! opening the pull request into the stable branch, always in that order.

mod error;
mod release_pr;

pub use error::PrError;
pub use release_pr::ReleasePr;

use crate::config::RepositoryRef;
use crate::github::GitHubClient;
use tracing::{info, info_span, Instrument};

/// Everything needed to cut a release branch and open its pull request.
#[derive(Debug, Clone)]
pub struct ReleaseRequest<'a> {
    /// Target repository.
    pub repository: &'a RepositoryRef,

    /// Name of the branch to create.
    pub branch_name: &'a str,

    /// Commit the branch starts at.
    pub base_sha: &'a str,

    /// Branch the pull request targets.
    pub stable_branch: &'a str,

    /// PR title.
    pub title: &'a str,

    /// PR body.
    pub body: &'a str,
}

/// Creates the release branch, then opens a pull request from it.
///
/// Issues exactly one create-ref call followed by one create-pull-request
/// call. If the branch cannot be created no pull request is attempted.
///
/// # Errors
///
/// Returns [`PrError::BranchCreation`] or [`PrError::PullRequest`] depending
/// on which call failed.
pub async fn open_release_pr(
    client: &GitHubClient,
    request: &ReleaseRequest<'_>,
) -> Result<ReleasePr, PrError> {
    let span = info_span!(
        "open_release_pr",
        branch = %request.branch_name,
        base = %request.stable_branch
    );

    async {
        client
            .create_branch(request.repository, request.branch_name, request.base_sha)
            .await
            .map_err(PrError::BranchCreation)?;
        info!(sha = %request.base_sha, "Created branch");

        let pr = client
            .create_pull_request(
                request.repository,
                request.branch_name,
                request.stable_branch,
                request.title,
                request.body,
            )
            .await
            .map_err(PrError::PullRequest)?;

        let url = pr
            .html_url
            .unwrap_or_else(|| fallback_pr_url(request.repository, pr.number));
        info!(pr_number = pr.number, title = %request.title, url = %url, "Created PR");

        Ok(ReleasePr {
            branch_name: request.branch_name.to_string(),
            number: pr.number,
            url,
        })
    }
    .instrument(span)
    .await
}

/// Browser URL of a pull request when the API response omits one.
fn fallback_pr_url(repository: &RepositoryRef, number: u64) -> String {
    format!("https://github.com/{repository}/pull/{number}")
}
