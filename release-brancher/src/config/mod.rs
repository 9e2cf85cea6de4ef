//! Run configuration.
//!
//! The run is driven by a repository list, a release number and a token, all
//! normally taken from the action's environment. Branch names, the tag prefix
//! and pull request wording come from an optional settings file.

mod error;
mod repository;
mod settings;

pub use error::ConfigError;
pub use repository::{parse_repository_list, RepositoryRef};
pub use settings::{
    default_branch_name_format, default_develop_branch, default_pr_body_format,
    default_pr_title_format, default_stable_branch, default_tag_prefix, Settings,
};

use std::path::{Path, PathBuf};
use url::Url;

/// Public GitHub REST endpoint.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Configuration for a release branching run.
#[derive(Debug, Clone)]
pub struct ReleaseConfig {
    /// Repositories to process, in order.
    repositories: Vec<RepositoryRef>,
    /// Release identifier, e.g. "5.0".
    release_number: String,
    /// GitHub token used for all API calls.
    token: String,
    /// Base URL of the REST API.
    api_base: String,
    /// File the report is appended to.
    step_summary_path: Option<PathBuf>,
    /// Whether to stop before any mutating call.
    dry_run: bool,
    /// Branch names, tag prefix and templates.
    settings: Settings,
}

impl ReleaseConfig {
    /// Builds a configuration from raw inputs.
    ///
    /// The token is checked first so a missing credential is reported before
    /// anything else.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingToken`], [`ConfigError::NoRepositories`],
    /// [`ConfigError::MissingReleaseNumber`] or a repository parse error.
    pub fn from_inputs(
        repositories: Option<&str>,
        release_number: Option<&str>,
        token: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let token = token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingToken)?;

        let repositories = parse_repository_list(repositories.unwrap_or_default())?;
        if repositories.is_empty() {
            return Err(ConfigError::NoRepositories);
        }

        let release_number = release_number
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .ok_or(ConfigError::MissingReleaseNumber)?;

        Ok(Self::new(
            repositories,
            release_number.to_string(),
            token.to_string(),
        ))
    }

    /// Creates a configuration with default settings against public GitHub.
    pub fn new(repositories: Vec<RepositoryRef>, release_number: String, token: String) -> Self {
        Self {
            repositories,
            release_number,
            token,
            api_base: DEFAULT_API_BASE.to_string(),
            step_summary_path: None,
            dry_run: false,
            settings: Settings::default(),
        }
    }

    /// Replaces the settings.
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Points the client at a different API host.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiUrl`] if the URL does not parse.
    pub fn with_api_base(mut self, api_base: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(api_base).map_err(|e| ConfigError::InvalidApiUrl {
            url: api_base.to_string(),
            source: e,
        })?;
        self.api_base = url.as_str().trim_end_matches('/').to_string();
        Ok(self)
    }

    /// Sets the file the report is appended to.
    pub fn with_step_summary_path(mut self, path: Option<PathBuf>) -> Self {
        self.step_summary_path = path;
        self
    }

    /// Enables or disables dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Returns the repositories to process.
    pub fn repositories(&self) -> &[RepositoryRef] {
        &self.repositories
    }

    /// Returns the release identifier.
    pub fn release_number(&self) -> &str {
        &self.release_number
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the REST API base URL.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Returns the step summary path, if any.
    pub fn step_summary_path(&self) -> Option<&Path> {
        self.step_summary_path.as_deref()
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Returns the settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
