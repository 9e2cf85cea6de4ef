//! Repository references.

use super::ConfigError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A repository named in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryRef {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub name: String,
}

impl RepositoryRef {
    /// Creates a reference from its parts.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Full repository name in "owner/name" format.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for RepositoryRef {
    type Err = ConfigError;

    fn from_str(entry: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidRepository {
            entry: entry.to_string(),
        };

        let mut parts = entry.trim().split('/');
        let owner = parts.next().map(str::trim).ok_or_else(invalid)?;
        let name = parts.next().map(str::trim).ok_or_else(invalid)?;

        if parts.next().is_some() || owner.is_empty() || name.is_empty() {
            return Err(invalid());
        }

        Ok(Self::new(owner, name))
    }
}

/// Parses a comma-separated list of `owner/repo` entries.
///
/// Entries are trimmed and empty entries are ignored, so a trailing comma is
/// harmless. Order is preserved.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidRepository`] for the first malformed entry.
pub fn parse_repository_list(input: &str) -> Result<Vec<RepositoryRef>, ConfigError> {
    input
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::parse)
        .collect()
}
