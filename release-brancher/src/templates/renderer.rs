//! Template renderer.

use super::{BranchContext, PullRequestContext, TemplateError};
use crate::config::Settings;
use handlebars::{no_escape, Context, Handlebars, Helper, HelperResult, Output, RenderContext};
use serde::Serialize;

const BRANCH_NAME: &str = "branch_name";
const PR_TITLE: &str = "pr_title";
const PR_BODY: &str = "pr_body";

/// Creates a configured Handlebars registry with custom helpers.
///
/// The registry is configured with:
/// - No HTML escaping (for markdown output)
/// - Strict mode (catches missing variables)
/// - `eq` helper for equality comparisons
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();

    // Disable HTML escaping for markdown output
    hbs.register_escape_fn(no_escape);

    // Enable strict mode to catch missing variables
    hbs.set_strict_mode(true);

    hbs.register_helper("eq", Box::new(eq_helper));

    hbs
}

/// Helper function for equality comparison in templates.
///
/// Usage: `{{#if (eq stable_branch "main")}}...{{/if}}`
fn eq_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let param1 = h.param(0).and_then(|v| v.value().as_str());
    let param2 = h.param(1).and_then(|v| v.value().as_str());

    let result = match (param1, param2) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    };

    out.write(if result { "true" } else { "" })?;
    Ok(())
}

/// Renders branch names and pull request text from the configured formats.
///
/// Formats are compiled once in [`TemplateRenderer::new`], so a malformed
/// template is reported before any repository is touched.
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Compiles the formats from `settings`.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::RegistrationError`] for invalid template syntax.
    pub fn new(settings: &Settings) -> Result<Self, TemplateError> {
        let mut handlebars = create_handlebars_registry();
        handlebars.register_template_string(BRANCH_NAME, &settings.branch_name_format)?;
        handlebars.register_template_string(PR_TITLE, &settings.pr_title_format)?;
        handlebars.register_template_string(PR_BODY, &settings.pr_body_format)?;
        Ok(Self { handlebars })
    }

    /// Renders the release branch name.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails, e.g. on an unknown variable.
    pub fn render_branch_name(&self, context: &BranchContext<'_>) -> Result<String, TemplateError> {
        Ok(self.render(BRANCH_NAME, context)?.trim().to_string())
    }

    /// Renders the pull request title.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render_pr_title(
        &self,
        context: &PullRequestContext<'_>,
    ) -> Result<String, TemplateError> {
        Ok(self.render(PR_TITLE, context)?.trim().to_string())
    }

    /// Renders the pull request body.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render_pr_body(&self, context: &PullRequestContext<'_>) -> Result<String, TemplateError> {
        self.render(PR_BODY, context)
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, TemplateError> {
        Ok(self.handlebars.render(name, data)?)
    }
}
