#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod github;
pub mod pull_requests;
pub mod runner;
pub mod summary;
pub mod tags;
pub mod templates;

pub use config::{
    parse_repository_list, ConfigError, ReleaseConfig, RepositoryRef, Settings, DEFAULT_API_BASE,
};
pub use github::{ACCEPT_HEADER, ApiError, BranchProbe, CompareStatus, Comparison, GitHubClient};
pub use pull_requests::{open_release_pr, PrError, ReleasePr, ReleaseRequest};
pub use runner::{RepositoryError, Runner, RunnerError};
pub use summary::{ProcessingResult, RunSummary};
pub use tags::{fetch_latest_tag, parse_tag_version, select_latest_tag, TagError, TagVersion};
pub use templates::{validate_branch_name, TemplateError, TemplateRenderer};
