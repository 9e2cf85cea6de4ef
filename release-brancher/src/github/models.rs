//! Response and request bodies for the REST calls used by the client.

use serde::{Deserialize, Serialize};

/// A git reference as returned by `GET /repos/{owner}/{repo}/git/ref/{ref}`.
#[derive(Debug, Clone, Deserialize)]
pub struct GitRef {
    /// Object the reference points at.
    pub object: GitObject,
}

/// Target of a git reference.
#[derive(Debug, Clone, Deserialize)]
pub struct GitObject {
    /// Object id.
    pub sha: String,
}

/// Classification reported by the compare endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareStatus {
    Identical,
    Ahead,
    Behind,
    Diverged,
    #[serde(other)]
    Unknown,
}

/// Result of `GET /repos/{owner}/{repo}/compare/{base}...{head}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Comparison {
    /// Relationship of head to base.
    pub status: CompareStatus,

    /// Commits in head that are not in base.
    pub ahead_by: u64,

    /// Commits in base that are not in head.
    #[serde(default)]
    pub behind_by: u64,
}

impl Comparison {
    /// Returns true if head has commits that base does not.
    ///
    /// An `identical` status wins over the counts.
    #[must_use]
    pub fn has_diverged(&self) -> bool {
        self.status != CompareStatus::Identical && self.ahead_by > 0
    }
}

/// Entry of `GET /repos/{owner}/{repo}/tags`.
#[derive(Debug, Clone, Deserialize)]
pub struct TagEntry {
    pub name: String,
}

/// Query string for paginated listings.
#[derive(Debug, Serialize)]
pub(crate) struct PageQuery {
    pub page: u32,
    pub per_page: u8,
}

/// Body of `POST /repos/{owner}/{repo}/git/refs`.
#[derive(Debug, Serialize)]
pub(crate) struct CreateRefRequest<'a> {
    #[serde(rename = "ref")]
    pub name: String,
    pub sha: &'a str,
}

/// Body of `POST /repos/{owner}/{repo}/pulls`.
#[derive(Debug, Serialize)]
pub(crate) struct CreatePullRequest<'a> {
    pub title: &'a str,
    pub body: &'a str,
    pub head: &'a str,
    pub base: &'a str,
}

/// The parts of a created pull request used for reporting.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedPullRequest {
    /// Pull request number.
    pub number: u64,

    /// Browser URL of the pull request.
    #[serde(default)]
    pub html_url: Option<String>,
}
