//! Orchestrates a release branching run.
//!
//! Repositories are processed one at a time in configured order. A failure in
//! one repository is recorded and the run moves on to the next.

mod error;

pub use error::{RepositoryError, RunnerError};

use crate::config::{ReleaseConfig, RepositoryRef};
use crate::github::{BranchProbe, GitHubClient};
use crate::pull_requests::{open_release_pr, ReleaseRequest};
use crate::summary::{ProcessingResult, RunSummary};
use crate::tags::fetch_latest_tag;
use crate::templates::{
    validate_branch_name, BranchContext, PullRequestContext, TemplateRenderer,
};
use tracing::{error, info, info_span, warn, Instrument};

/// Runs the release workflow over every configured repository.
pub struct Runner {
    config: ReleaseConfig,
    client: GitHubClient,
    renderer: TemplateRenderer,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the GitHub client cannot be built or a
    /// format in the settings does not compile.
    pub fn new(config: ReleaseConfig) -> Result<Self, RunnerError> {
        let client = GitHubClient::from_config(&config)?;
        Self::with_client(config, client)
    }

    /// Builds a runner around an existing client.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Template`] if a format does not compile.
    pub fn with_client(config: ReleaseConfig, client: GitHubClient) -> Result<Self, RunnerError> {
        let renderer = TemplateRenderer::new(config.settings())?;
        Ok(Self {
            config,
            client,
            renderer,
        })
    }

    /// Processes every repository and returns the accumulated summary.
    ///
    /// Never stops early: each repository is attempted regardless of earlier
    /// failures.
    pub async fn run(&self) -> RunSummary {
        let mut summary = RunSummary::new(self.config.dry_run());
        let repositories = self.config.repositories();

        info!(
            count = repositories.len(),
            release = %self.config.release_number(),
            dry_run = self.config.dry_run(),
            "Starting release run"
        );

        for repository in repositories {
            let span = info_span!("process_repository", repo = %repository);
            let result = self.process_repository(repository).instrument(span).await;
            summary.record_result(&result);
        }

        summary
    }

    async fn process_repository(&self, repository: &RepositoryRef) -> ProcessingResult {
        info!("Processing repository");

        match self.try_process_repository(repository).await {
            Ok(result) => result,
            Err(e) => {
                error!(error = %e, "Failed to process repository");
                ProcessingResult::Failed {
                    repository: repository.full_name(),
                    error: e.to_string(),
                }
            }
        }
    }

    async fn try_process_repository(
        &self,
        repository: &RepositoryRef,
    ) -> Result<ProcessingResult, RepositoryError> {
        let settings = self.config.settings();
        let full_name = repository.full_name();

        let tag = fetch_latest_tag(&self.client, repository, &settings.tag_prefix).await?;

        let develop_sha = self
            .client
            .get_ref_sha(repository, &format!("heads/{}", settings.develop_branch))
            .await?;

        let branch_name = self.renderer.render_branch_name(&BranchContext {
            release_number: self.config.release_number(),
            repository: &full_name,
            develop_branch: &settings.develop_branch,
            stable_branch: &settings.stable_branch,
        })?;
        validate_branch_name(&branch_name)?;

        match self.client.probe_branch(repository, &branch_name).await {
            Ok(BranchProbe::Missing) => {}
            Ok(BranchProbe::Exists) => {
                info!(branch = %branch_name, "Release branch already exists, skipping");
                return Ok(ProcessingResult::Skipped {
                    repository: full_name,
                    reason: format!("release branch {branch_name} already exists"),
                });
            }
            Err(e) => {
                // Unexpected probe responses skip the repository without failing the run.
                warn!(branch = %branch_name, error = %e, "Could not verify release branch, skipping");
                return Ok(ProcessingResult::Skipped {
                    repository: full_name,
                    reason: e.to_string(),
                });
            }
        }

        let comparison = self
            .client
            .compare(repository, &tag, &settings.develop_branch)
            .await?;
        if !comparison.has_diverged() {
            info!(tag = %tag, "Tag is up to date with development branch, no release branch needed");
            return Ok(ProcessingResult::Skipped {
                repository: full_name,
                reason: format!("{} has no commits since {tag}", settings.develop_branch),
            });
        }
        info!(
            tag = %tag,
            ahead_by = comparison.ahead_by,
            "Development branch is ahead of tag, creating release branch"
        );

        if self.config.dry_run() {
            info!(branch = %branch_name, "Dry run, not creating branch or PR");
            return Ok(ProcessingResult::Planned {
                repository: full_name,
                branch: branch_name,
                ahead_by: comparison.ahead_by,
            });
        }

        let context = PullRequestContext {
            release_number: self.config.release_number(),
            repository: &full_name,
            branch_name: &branch_name,
            develop_branch: &settings.develop_branch,
            stable_branch: &settings.stable_branch,
            tag: &tag,
            ahead_by: comparison.ahead_by,
        };
        let title = self.renderer.render_pr_title(&context)?;
        let body = self.renderer.render_pr_body(&context)?;

        let pr = open_release_pr(
            &self.client,
            &ReleaseRequest {
                repository,
                branch_name: &branch_name,
                base_sha: &develop_sha,
                stable_branch: &settings.stable_branch,
                title: &title,
                body: &body,
            },
        )
        .await?;

        Ok(ProcessingResult::Created {
            repository: full_name,
            branch: pr.branch_name,
            url: pr.url,
        })
    }
}
