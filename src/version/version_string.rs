//! Dotted-numeric version identifiers with an optional pre-release tag

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use semver::Prerelease;

use crate::version::error::VersionParseError;

/// A parsed version such as `1.2`, `0.10.3` or `2.0.0-rc.1`
///
/// Ordering follows semver precedence generalized to any number of numeric
/// components:
/// - components are compared by value, left to right
/// - missing trailing components count as zero (`1.2 == 1.2.0`)
/// - a pre-release orders before the release it precedes (`2.0.0-pre < 2.0.0`)
/// - two pre-release tags compare by semver pre-release precedence
#[derive(Debug, Clone)]
pub struct VersionString {
    raw: String,
    components: Vec<u64>,
    pre: Option<Prerelease>,
}

impl VersionString {
    /// Parse `N(.N)*` optionally followed by `-<tag>`
    ///
    /// Examples:
    /// - "1" -> [1]
    /// - "0.10.3" -> [0, 10, 3]
    /// - "2.0.0-rc.1" -> [2, 0, 0] with tag "rc.1"
    pub fn parse(input: &str) -> Result<Self, VersionParseError> {
        if input.is_empty() {
            return Err(VersionParseError::Empty);
        }

        let (release, tag) = match input.split_once('-') {
            Some((release, tag)) => (release, Some(tag)),
            None => (input, None),
        };

        let components = release
            .split('.')
            .map(|component| parse_component(input, component))
            .collect::<Result<Vec<_>, _>>()?;

        let pre = tag.map(|tag| parse_prerelease(input, tag)).transpose()?;

        Ok(Self {
            raw: input.to_string(),
            components,
            pre,
        })
    }

    /// The text this version was parsed from
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn components(&self) -> &[u64] {
        &self.components
    }

    pub fn prerelease(&self) -> Option<&str> {
        self.pre.as_ref().map(Prerelease::as_str)
    }

    pub fn is_prerelease(&self) -> bool {
        self.pre.is_some()
    }

    /// Components with trailing zeros removed
    fn significant_components(&self) -> &[u64] {
        let len = self
            .components
            .iter()
            .rposition(|&c| c != 0)
            .map_or(0, |i| i + 1);
        &self.components[..len]
    }
}

fn parse_component(version: &str, component: &str) -> Result<u64, VersionParseError> {
    if component.is_empty() {
        return Err(VersionParseError::EmptyComponent(version.to_string()));
    }

    // u64::from_str would accept a leading '+'
    if !component.bytes().all(|b| b.is_ascii_digit()) {
        return Err(VersionParseError::NonNumeric {
            version: version.to_string(),
            component: component.to_string(),
        });
    }

    component
        .parse()
        .map_err(|_| VersionParseError::Overflow {
            version: version.to_string(),
            component: component.to_string(),
        })
}

fn parse_prerelease(version: &str, tag: &str) -> Result<Prerelease, VersionParseError> {
    let invalid = || VersionParseError::InvalidPrerelease {
        version: version.to_string(),
        tag: tag.to_string(),
    };

    // Prerelease::new("") is Ok(EMPTY), but a dangling '-' is not a version
    if tag.is_empty() {
        return Err(invalid());
    }

    Prerelease::new(tag).map_err(|_| invalid())
}

/// Compare two versions; `Less` means `a` is older than `b`
pub fn compare(a: &VersionString, b: &VersionString) -> Ordering {
    a.cmp(b)
}

impl Ord for VersionString {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.components.len().max(other.components.len());

        (0..len)
            .map(|i| {
                let a = self.components.get(i).copied().unwrap_or(0);
                let b = other.components.get(i).copied().unwrap_or(0);
                a.cmp(&b)
            })
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
            .then_with(|| match (&self.pre, &other.pre) {
                (None, None) => Ordering::Equal,
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (Some(a), Some(b)) => a.cmp(b),
            })
    }
}

impl PartialOrd for VersionString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for VersionString {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for VersionString {}

impl Hash for VersionString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant_components().hash(state);
        self.pre.hash(state);
    }
}

impl FromStr for VersionString {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for VersionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
