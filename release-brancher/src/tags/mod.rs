//! Release tag selection.
//!
//! Finds the most recent release tag of a repository by paging through its
//! tags, keeping those with the configured prefix and ordering them by the
//! version that follows the prefix.

mod error;
mod version;

pub use error::TagError;
pub use version::{parse_tag_version, TagVersion};

use crate::config::RepositoryRef;
use crate::github::GitHubClient;
use tracing::{debug, info};

/// Tags requested per page.
pub const TAGS_PER_PAGE: u8 = 100;

/// Returns the tag with the highest version among those starting with `prefix`.
///
/// Tags whose suffix does not parse as a version still qualify but rank below
/// every parsed one. On equal versions the earliest listed tag wins.
#[must_use]
pub fn select_latest_tag<'a, I>(names: I, prefix: &str) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(&str, Option<TagVersion>)> = None;

    for name in names {
        let Some(suffix) = name.strip_prefix(prefix) else {
            continue;
        };
        let version = parse_tag_version(suffix);
        let replace = match &best {
            Some((_, best_version)) => version > *best_version,
            None => true,
        };
        if replace {
            best = Some((name, version));
        }
    }

    best.map(|(name, _)| name)
}

/// Fetches every tag of `repository` and returns the latest one with `prefix`.
///
/// Pages are requested until one comes back empty or shorter than
/// [`TAGS_PER_PAGE`].
///
/// # Errors
///
/// Returns [`TagError::Api`] if a page cannot be fetched and
/// [`TagError::NoMatchingTag`] if no tag has the prefix.
pub async fn fetch_latest_tag(
    client: &GitHubClient,
    repository: &RepositoryRef,
    prefix: &str,
) -> Result<String, TagError> {
    let mut matching = Vec::new();
    let mut page = 1;

    loop {
        let names = client
            .list_tags_page(repository, page, TAGS_PER_PAGE)
            .await?;
        let count = names.len();
        debug!(page, count, "Fetched tag page");

        matching.extend(names.into_iter().filter(|name| name.starts_with(prefix)));

        if count < usize::from(TAGS_PER_PAGE) {
            break;
        }
        page += 1;
    }

    let latest = select_latest_tag(matching.iter().map(String::as_str), prefix)
        .map(str::to_string)
        .ok_or_else(|| TagError::NoMatchingTag {
            prefix: prefix.to_string(),
        })?;

    info!(tag = %latest, candidates = matching.len(), "Resolved latest tag");
    Ok(latest)
}
