//! Run summary types.

use super::result::ProcessingResult;
use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::io::{self, Write as _};
use std::path::Path;

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of repositories attempted.
    pub repositories_processed: usize,

    /// URLs of pull requests created, in processing order.
    pub created_pr_links: Vec<String>,

    /// One line per failed repository, in processing order.
    pub errors: Vec<String>,

    /// Number of repositories skipped.
    pub skipped: usize,

    /// Release branches a dry run would have created.
    pub planned: Vec<String>,

    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    /// Updates the summary with a processing result.
    pub fn record_result(&mut self, result: &ProcessingResult) {
        self.repositories_processed += 1;
        match result {
            ProcessingResult::Created { url, .. } => self.created_pr_links.push(url.clone()),
            ProcessingResult::Skipped { .. } => self.skipped += 1,
            ProcessingResult::Planned {
                repository,
                branch,
                ahead_by,
            } => self
                .planned
                .push(format!("{repository}: {branch} ({ahead_by} commits ahead)")),
            ProcessingResult::Failed { repository, error } => self
                .errors
                .push(format!("Error processing {repository}: {error}")),
        }
    }

    /// Returns true if any repository failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Renders the human-readable report.
    ///
    /// Sections are omitted when empty, so a quiet run renders nothing.
    #[must_use]
    pub fn render_report(&self) -> String {
        let mut report = String::new();
        write_section(&mut report, "Created PRs:", &self.created_pr_links);
        write_section(&mut report, "Planned release branches:", &self.planned);
        write_section(&mut report, "Errors encountered:", &self.errors);
        report
    }

    /// Appends the report to a step summary file, creating it if needed.
    ///
    /// Nothing is written when the report is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or written.
    pub fn append_to_step_summary(&self, path: &Path) -> io::Result<()> {
        let report = self.render_report();
        if report.is_empty() {
            return Ok(());
        }

        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(report.as_bytes())
    }
}

fn write_section(report: &mut String, heading: &str, lines: &[String]) {
    if lines.is_empty() {
        return;
    }
    // Writing to a String cannot fail.
    let _ = writeln!(report, "{heading}");
    for line in lines {
        let _ = writeln!(report, "- {line}");
    }
}
