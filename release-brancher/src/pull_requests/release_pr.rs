//! Release pull request record.

/// A release branch and the pull request opened for it.
#[derive(Debug, Clone)]
pub struct ReleasePr {
    /// Branch created from the development line.
    pub branch_name: String,

    /// GitHub PR number.
    pub number: u64,

    /// GitHub PR URL.
    pub url: String,
}
