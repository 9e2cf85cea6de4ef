//! Template rendering using Handlebars.
//!
//! Branch names, pull request titles and bodies are rendered from the formats
//! in [`Settings`](crate::config::Settings).

mod error;
mod renderer;

pub use error::TemplateError;
pub use renderer::{create_handlebars_registry, TemplateRenderer};

use bstr::BStr;
use serde::Serialize;

/// Variables available to the branch name format.
#[derive(Debug, Clone, Serialize)]
pub struct BranchContext<'a> {
    pub release_number: &'a str,
    pub repository: &'a str,
    pub develop_branch: &'a str,
    pub stable_branch: &'a str,
}

/// Variables available to the pull request title and body formats.
#[derive(Debug, Clone, Serialize)]
pub struct PullRequestContext<'a> {
    pub release_number: &'a str,
    pub repository: &'a str,
    pub branch_name: &'a str,
    pub develop_branch: &'a str,
    pub stable_branch: &'a str,
    /// Latest release tag the branch is compared against.
    pub tag: &'a str,
    /// Commits on the development branch since `tag`.
    pub ahead_by: u64,
}

/// Checks that `name` is usable as `refs/heads/{name}`.
///
/// # Errors
///
/// Returns [`TemplateError::InvalidBranchName`] describing the first problem.
pub fn validate_branch_name(name: &str) -> Result<(), TemplateError> {
    let full_name = format!("refs/heads/{name}");
    gix_validate::reference::name(BStr::new(full_name.as_str()))
        .map(|_| ())
        .map_err(|e| TemplateError::InvalidBranchName {
            name: name.to_string(),
            message: e.to_string(),
        })
}
