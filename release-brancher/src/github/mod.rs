//! Thin GitHub REST client.
//!
//! Wraps the five calls the release run needs. Every call goes through one
//! authenticated [`Octocrab`] instance and any non-success response is turned
//! into an [`ApiError`] naming the call that failed.

mod error;
mod models;

pub use error::ApiError;
pub use models::{CompareStatus, Comparison, CreatedPullRequest, GitObject, GitRef, TagEntry};

use crate::config::{ReleaseConfig, RepositoryRef};
use models::{CreatePullRequest, CreateRefRequest, PageQuery};
use http::header::ACCEPT;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use tracing::debug;

/// Media type sent with every request.
pub const ACCEPT_HEADER: &str = "application/vnd.github+json";

/// Whether a branch exists on the remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchProbe {
    Exists,
    Missing,
}

/// GitHub client exposing the release workflow's REST calls.
#[derive(Clone)]
pub struct GitHubClient {
    octocrab: Octocrab,
}

impl GitHubClient {
    /// Builds a client for the configured API host and token.
    ///
    /// Retries are disabled; a failing call fails its repository. Every
    /// request carries the [`ACCEPT_HEADER`] media type.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL or HTTP client cannot be set up.
    pub fn from_config(config: &ReleaseConfig) -> Result<Self, octocrab::Error> {
        let octocrab = Octocrab::builder()
            .base_uri(config.api_base())?
            .personal_token(config.token().to_string())
            .add_retry_config(RetryConfig::None)
            .add_header(ACCEPT, ACCEPT_HEADER.to_string())
            .build()?;
        Ok(Self::new(octocrab))
    }

    /// Wraps an already configured [`Octocrab`].
    pub fn new(octocrab: Octocrab) -> Self {
        Self { octocrab }
    }

    /// Resolves a reference such as `heads/develop` to its commit sha.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any non-success response.
    pub async fn get_ref_sha(
        &self,
        repository: &RepositoryRef,
        reference: &str,
    ) -> Result<String, ApiError> {
        debug!(repo = %repository, reference, "Fetching ref");
        let git_ref = self
            .get_ref(repository, reference)
            .await
            .map_err(|e| ApiError::request(format!("get ref {reference}"), e))?;
        Ok(git_ref.object.sha)
    }

    /// Checks whether `branch` exists.
    ///
    /// Only a 404 counts as missing, whatever its body; every other failure
    /// is an error.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for any non-success response other than 404.
    pub async fn probe_branch(
        &self,
        repository: &RepositoryRef,
        branch: &str,
    ) -> Result<BranchProbe, ApiError> {
        debug!(repo = %repository, branch, "Checking for branch");
        let operation = || format!("check for branch {branch}");
        let response = self
            .octocrab
            ._get(ref_route(repository, &format!("heads/{branch}")))
            .await
            .map_err(|e| ApiError::request(operation(), e))?;

        if response.status().as_u16() == 404 {
            return Ok(BranchProbe::Missing);
        }
        octocrab::map_github_error(response)
            .await
            .map(|_| BranchProbe::Exists)
            .map_err(|e| ApiError::request(operation(), e))
    }

    /// Compares `head` against `base`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any non-success response.
    pub async fn compare(
        &self,
        repository: &RepositoryRef,
        base: &str,
        head: &str,
    ) -> Result<Comparison, ApiError> {
        debug!(repo = %repository, base, head, "Comparing refs");
        let route = format!(
            "/repos/{}/{}/compare/{base}...{head}",
            repository.owner, repository.name
        );
        self.octocrab
            .get(route, None::<&()>)
            .await
            .map_err(|e| ApiError::request(format!("compare {base}...{head}"), e))
    }

    /// Creates `refs/heads/{branch}` pointing at `sha`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any non-success response.
    pub async fn create_branch(
        &self,
        repository: &RepositoryRef,
        branch: &str,
        sha: &str,
    ) -> Result<GitRef, ApiError> {
        debug!(repo = %repository, branch, sha, "Creating branch");
        let route = format!("/repos/{}/{}/git/refs", repository.owner, repository.name);
        let body = CreateRefRequest {
            name: format!("refs/heads/{branch}"),
            sha,
        };
        self.octocrab
            .post(route, Some(&body))
            .await
            .map_err(|e| ApiError::request(format!("create branch {branch}"), e))
    }

    /// Opens a pull request from `head` into `base`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any non-success response.
    pub async fn create_pull_request(
        &self,
        repository: &RepositoryRef,
        head: &str,
        base: &str,
        title: &str,
        body: &str,
    ) -> Result<CreatedPullRequest, ApiError> {
        debug!(repo = %repository, head, base, "Creating pull request");
        let route = format!("/repos/{}/{}/pulls", repository.owner, repository.name);
        let request = CreatePullRequest {
            title,
            body,
            head,
            base,
        };
        self.octocrab
            .post(route, Some(&request))
            .await
            .map_err(|e| ApiError::request("create PR", e))
    }

    /// Lists one page of tag names.
    ///
    /// Pages are 1-based.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any non-success response.
    pub async fn list_tags_page(
        &self,
        repository: &RepositoryRef,
        page: u32,
        per_page: u8,
    ) -> Result<Vec<String>, ApiError> {
        debug!(repo = %repository, page, per_page, "Listing tags");
        let route = format!("/repos/{}/{}/tags", repository.owner, repository.name);
        let tags: Vec<TagEntry> = self
            .octocrab
            .get(route, Some(&PageQuery { page, per_page }))
            .await
            .map_err(|e| ApiError::request("fetch tags", e))?;
        Ok(tags.into_iter().map(|tag| tag.name).collect())
    }

    async fn get_ref(
        &self,
        repository: &RepositoryRef,
        reference: &str,
    ) -> Result<GitRef, octocrab::Error> {
        self.octocrab
            .get(ref_route(repository, reference), None::<&()>)
            .await
    }
}

fn ref_route(repository: &RepositoryRef, reference: &str) -> String {
    format!(
        "/repos/{}/{}/git/ref/{reference}",
        repository.owner, repository.name
    )
}
