//! Version identifiers and their sort keys.
//!
//! A version identifier is an opaque string. Most of them look like
//! `MAJOR.MINOR.PATCH`, so ordering is driven by a numeric prefix parsed
//! from the front of the string; anything after the prefix (pre-release
//! tags, suffixes) is ignored for ordering.

use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::error::DomainError;

static SEMVER_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)(?:\.([0-9]+))?(?:\.([0-9]+))?").expect("Invalid version prefix regex")
});

/// Sortable key derived from a version identifier.
///
/// Ordering and equality consider only `(major, minor, patch)`. Two
/// identifiers with the same numeric prefix, such as `1.0` and `1.0.0-rc1`,
/// produce equal keys; the original string is carried for display only.
#[derive(Debug, Clone)]
pub struct VersionKey {
    major: u64,
    minor: u64,
    patch: u64,
    original: String,
}

impl VersionKey {
    pub fn parse(version: &str) -> Self {
        let (major, minor, patch) = match SEMVER_PREFIX.captures(version) {
            Some(caps) => {
                let part = |i: usize| caps.get(i).map_or(0, |m| parse_component(m.as_str()));
                (part(1), part(2), part(3))
            }
            None => (0, 0, 0),
        };

        Self {
            major,
            minor,
            patch,
            original: version.to_owned(),
        }
    }

    pub const fn numeric(&self) -> (u64, u64, u64) {
        (self.major, self.minor, self.patch)
    }

    pub fn original(&self) -> &str {
        &self.original
    }
}

/// Shorthand for [`VersionKey::parse`].
pub fn version_key(version: &str) -> VersionKey {
    VersionKey::parse(version)
}

// Digit runs longer than u64 saturate instead of failing.
fn parse_component(digits: &str) -> u64 {
    digits.parse().unwrap_or(u64::MAX)
}

impl PartialEq for VersionKey {
    fn eq(&self, other: &Self) -> bool {
        self.numeric() == other.numeric()
    }
}

impl Eq for VersionKey {}

impl PartialOrd for VersionKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VersionKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.numeric().cmp(&other.numeric())
    }
}

impl fmt::Display for VersionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}.{}.{})",
            self.original, self.major, self.minor, self.patch
        )
    }
}

/// Trim a user-supplied version and make sure it names a single directory
/// component under the docs directory.
pub fn normalize_version(raw: &str) -> Result<&str, DomainError> {
    let version = raw.trim();
    let invalid = |reason: &str| DomainError::InvalidVersion {
        version: raw.to_owned(),
        reason: reason.to_owned(),
    };

    if version.is_empty() {
        return Err(invalid("version cannot be empty"));
    }
    if version == "." || version == ".." {
        return Err(invalid("version cannot be a relative directory reference"));
    }
    if version.contains(['/', '\\']) {
        return Err(invalid("version cannot contain path separators"));
    }
    if version.contains('\0') {
        return Err(invalid("version cannot contain NUL bytes"));
    }
    Ok(version)
}
