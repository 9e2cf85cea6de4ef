//! Optional settings file deserialization.

use super::ConfigError;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Tunables read from an optional `settings.toml`.
///
/// Every key is optional; omitted keys fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Settings {
    /// Branch the release branch is cut from.
    pub develop_branch: String,

    /// Branch the release pull request targets.
    pub stable_branch: String,

    /// Prefix identifying release tags.
    pub tag_prefix: String,

    /// Handlebars format for the release branch name.
    pub branch_name_format: String,

    /// Handlebars format for pull request titles.
    pub pr_title_format: String,

    /// Handlebars format for pull request bodies.
    pub pr_body_format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            develop_branch: default_develop_branch(),
            stable_branch: default_stable_branch(),
            tag_prefix: default_tag_prefix(),
            branch_name_format: default_branch_name_format(),
            pr_title_format: default_pr_title_format(),
            pr_body_format: default_pr_body_format(),
        }
    }
}

pub fn default_develop_branch() -> String {
    "develop".to_string()
}

pub fn default_stable_branch() -> String {
    "master".to_string()
}

pub fn default_tag_prefix() -> String {
    "eah_".to_string()
}

pub fn default_branch_name_format() -> String {
    "release/{{release_number}}".to_string()
}

pub fn default_pr_title_format() -> String {
    "feat(merge): merge {{branch_name}} into {{stable_branch}}".to_string()
}

pub fn default_pr_body_format() -> String {
    "PR to merge {{branch_name}} into {{stable_branch}}.".to_string()
}

impl Settings {
    /// Loads and validates settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, parsed or validated.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading settings");

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        let settings: Self = toml::from_str(&content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })?;

        settings.validate(path)?;
        Ok(settings)
    }

    /// Validates the settings values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] for blank values.
    pub fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let fields = [
            ("develop-branch", &self.develop_branch),
            ("stable-branch", &self.stable_branch),
            ("tag-prefix", &self.tag_prefix),
            ("branch-name-format", &self.branch_name_format),
            ("pr-title-format", &self.pr_title_format),
        ];

        for (key, value) in fields {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    path: path.display().to_string(),
                    message: format!("{key} cannot be empty"),
                });
            }
        }

        if self.develop_branch == self.stable_branch {
            return Err(ConfigError::ValidationError {
                path: path.display().to_string(),
                message: "develop-branch and stable-branch must differ".to_string(),
            });
        }

        Ok(())
    }
}
