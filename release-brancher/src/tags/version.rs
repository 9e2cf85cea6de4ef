//! Version parsing for release tag suffixes.

use semver::Prerelease;

/// Version carried by a release tag suffix.
///
/// Ordered by the numeric release components (any count, trailing zeros
/// ignored, so `5.0` equals `5.0.0`), then by pre-release, where a final
/// release sorts after all of its pre-releases.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TagVersion {
    release: Vec<u64>,
    pre: Prerelease,
}

impl TagVersion {
    /// Numeric release components without trailing zeros.
    #[must_use]
    pub fn release(&self) -> &[u64] {
        &self.release
    }

    /// Returns true for pre-release versions such as `2.0rc1` or `2.0.0-beta.2`.
    #[must_use]
    pub fn is_prerelease(&self) -> bool {
        !self.pre.is_empty()
    }
}

/// Parses the version part of a tag, e.g. `1.10.0` from `eah_1.10.0`.
///
/// Accepts an optional leading `v`, any number of dot-separated numeric
/// components and an optional pre-release. Pre-releases are either attached
/// PEP 440 style (`2.0rc1`, `1.0.b2`, `3a`) or follow a hyphen in semver
/// style (`2.0.0-rc.1`). Build metadata after `+` is ignored.
///
/// Returns `None` for anything else; callers rank those below every parsed
/// version, which `Option`'s ordering already does.
#[must_use]
pub fn parse_tag_version(text: &str) -> Option<TagVersion> {
    let text = text.trim();
    let text = text
        .strip_prefix('v')
        .or_else(|| text.strip_prefix('V'))
        .unwrap_or(text);
    let text = text.split_once('+').map_or(text, |(version, _)| version);

    let release_end = text
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(text.len());
    let (core, rest) = text.split_at(release_end);
    let core = if rest.is_empty() {
        core
    } else {
        core.strip_suffix('.').unwrap_or(core)
    };

    let mut release = Vec::new();
    for part in core.split('.') {
        if part.is_empty() {
            return None;
        }
        release.push(part.parse::<u64>().ok()?);
    }
    while release.len() > 1 && release.last() == Some(&0) {
        release.pop();
    }

    let pre = match rest {
        "" => Prerelease::EMPTY,
        _ => parse_prerelease(rest)?,
    };

    Some(TagVersion { release, pre })
}

fn parse_prerelease(text: &str) -> Option<Prerelease> {
    match text.strip_prefix('-') {
        Some("") => None,
        Some(hyphenated) => {
            labelled_prerelease(hyphenated).or_else(|| Prerelease::new(hyphenated).ok())
        }
        None => labelled_prerelease(text.strip_prefix('_').unwrap_or(text)),
    }
}

/// Normalises `a`, `b` and `rc` style pre-releases to `<label>.<number>` so
/// the number compares numerically.
fn labelled_prerelease(text: &str) -> Option<Prerelease> {
    let label_end = text
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(text.len());
    let (label, number) = text.split_at(label_end);

    let label = match label.to_ascii_lowercase().as_str() {
        "a" | "alpha" => "a",
        "b" | "beta" => "b",
        "c" | "rc" | "pre" | "preview" => "rc",
        _ => return None,
    };

    let number = number.trim_start_matches(['.', '-', '_']);
    let number: u64 = if number.is_empty() {
        0
    } else {
        number.parse().ok()?
    };

    Prerelease::new(&format!("{label}.{number}")).ok()
}
