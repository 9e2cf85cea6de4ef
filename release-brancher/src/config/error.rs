//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading the run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No GitHub token was supplied.
    #[error("GH_TOKEN environment variable not set")]
    MissingToken,

    /// The repository list was empty.
    #[error("No repositories defined in the repository list")]
    NoRepositories,

    /// No release number was supplied.
    #[error("RELEASE_NUMBER environment variable not set")]
    MissingReleaseNumber,

    /// A repository entry was not in `owner/repo` form.
    #[error("Invalid repository '{entry}': expected 'owner/repo'")]
    InvalidRepository { entry: String },

    /// The API base URL could not be parsed.
    #[error("Invalid API URL '{url}': {source}")]
    InvalidApiUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse settings in '{path}': {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// Validation error in settings.
    #[error("Validation error in '{path}': {message}")]
    ValidationError { path: String, message: String },
}
