//! Template rendering error types.

use thiserror::Error;

/// Template rendering error.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Handlebars rendering error.
    #[error("Template rendering error: {0}")]
    RenderError(#[from] handlebars::RenderError),

    /// Template registration error.
    #[error("Template registration error: {0}")]
    RegistrationError(#[from] handlebars::TemplateError),

    /// A rendered branch name is not a valid git reference.
    #[error("Invalid branch name '{name}': {message}")]
    InvalidBranchName { name: String, message: String },
}
