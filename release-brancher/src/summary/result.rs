//! Processing result types.

/// Result of processing a single repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingResult {
    /// Release branch and pull request were created.
    Created {
        /// Repository full name.
        repository: String,
        /// Release branch name.
        branch: String,
        /// GitHub PR URL.
        url: String,
    },

    /// Nothing to do, or the repository could not be checked safely.
    Skipped {
        /// Repository full name.
        repository: String,
        /// Reason for skipping.
        reason: String,
    },

    /// Dry run: a release branch would have been created.
    Planned {
        /// Repository full name.
        repository: String,
        /// Release branch name.
        branch: String,
        /// Commits on the development branch since the latest tag.
        ahead_by: u64,
    },

    /// Processing failed.
    Failed {
        /// Repository full name.
        repository: String,
        /// Error message.
        error: String,
    },
}
