//! Version numbers and release derivation.
//!
//! A project under development carries a `M.N.P-SNAPSHOT` version in its
//! manifest. Releasing it produces two further versions: the plain `M.N.P`
//! that gets tagged, and `M.N.(P+1)-SNAPSHOT` for the work that follows.

use crate::error::{ReleaseError, Result};
use regex::Regex;
use std::fmt::{self, Write as _};
use std::sync::LazyLock;

/// Suffix marking a version as unreleased.
pub const DEVELOPMENT_MARKER: &str = "SNAPSHOT";

/// Accepted manifest version form.
///
/// Micro must be at least 1, so `X.Y.0-SNAPSHOT` is rejected. A single
/// trailing newline is tolerated.
const DEVELOPMENT_PATTERN: &str = r"^([1-9][0-9]*)\.([0-9]+)\.([1-9][0-9]*)-SNAPSHOT\n?$";

#[expect(clippy::expect_used, reason = "the pattern is a compile-time literal")]
static DEVELOPMENT_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEVELOPMENT_PATTERN).expect("valid development version pattern"));

/// A three-part version number, optionally tagged as a development version.
///
/// Leading zeros written in the minor component are kept, so `1.01.1`
/// renders back as `1.01.1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Version {
    major: u64,
    minor: u64,
    minor_padding: usize,
    micro: u64,
    development: bool,
}

impl Version {
    /// Create a release version.
    #[must_use]
    pub const fn release(major: u64, minor: u64, micro: u64) -> Self {
        Self {
            major,
            minor,
            minor_padding: 0,
            micro,
            development: false,
        }
    }

    /// Create a development version.
    #[must_use]
    pub const fn development(major: u64, minor: u64, micro: u64) -> Self {
        Self {
            major,
            minor,
            minor_padding: 0,
            micro,
            development: true,
        }
    }

    /// Parse a manifest version in `M.N.P-SNAPSHOT` form.
    ///
    /// # Errors
    ///
    /// Returns [`ReleaseError::MalformedVersion`] when the text does not
    /// match the development pattern or a component does not fit in a `u64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pom_release::version::Version;
    ///
    /// let version = Version::parse_development("2.5.3-SNAPSHOT")?;
    /// assert_eq!(version, Version::development(2, 5, 3));
    /// assert!(Version::parse_development("1.0.0-SNAPSHOT").is_err());
    /// # Ok::<(), pom_release::error::ReleaseError>(())
    /// ```
    pub fn parse_development(text: &str) -> Result<Self> {
        let malformed = || ReleaseError::MalformedVersion {
            version: text.to_owned(),
        };

        let captures = DEVELOPMENT_VERSION.captures(text).ok_or_else(malformed)?;
        let component = |index: usize| {
            captures
                .get(index)
                .and_then(|m| m.as_str().parse::<u64>().ok())
                .ok_or_else(malformed)
        };

        let minor = component(2)?;
        let minor_text = captures.get(2).map_or("", |m| m.as_str());
        let significant = minor_text.trim_start_matches('0').len().max(1);
        let minor_padding = minor_text.len().saturating_sub(significant);

        Ok(Self {
            minor_padding,
            ..Self::development(component(1)?, minor, component(3)?)
        })
    }

    /// Whether this version carries the development marker.
    #[must_use]
    pub const fn is_development(&self) -> bool {
        self.development
    }

    /// The same numbers without the development marker.
    #[must_use]
    pub const fn to_release(self) -> Self {
        Self {
            development: false,
            ..self
        }
    }

    /// The following development version, with micro incremented.
    ///
    /// Returns `None` if the micro component would overflow.
    #[must_use]
    pub fn next_development(self) -> Option<Self> {
        let micro = self.micro.checked_add(1)?;
        Some(Self {
            micro,
            development: true,
            ..self
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.", self.major)?;
        for _ in 0..self.minor_padding {
            f.write_char('0')?;
        }
        write!(f, "{}.{}", self.minor, self.micro)?;
        if self.development {
            write!(f, "-{DEVELOPMENT_MARKER}")?;
        }
        Ok(())
    }
}

/// The three versions involved in one release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionPlan {
    /// Version read from the manifest.
    pub source: Version,
    /// Version to commit and tag.
    pub release: Version,
    /// Version the manifest is left at afterwards.
    pub next_development: Version,
}

impl VersionPlan {
    /// Derive the release and next development versions from a manifest
    /// version.
    ///
    /// # Errors
    ///
    /// Returns [`ReleaseError::MalformedVersion`] if `source` is not a
    /// development version or its micro component cannot be incremented.
    ///
    /// # Examples
    ///
    /// ```
    /// use pom_release::version::{Version, VersionPlan};
    ///
    /// let plan = VersionPlan::derive(Version::development(1, 0, 1))?;
    /// assert_eq!(plan.release.to_string(), "1.0.1");
    /// assert_eq!(plan.next_development.to_string(), "1.0.2-SNAPSHOT");
    /// # Ok::<(), pom_release::error::ReleaseError>(())
    /// ```
    pub fn derive(source: Version) -> Result<Self> {
        let malformed = || ReleaseError::MalformedVersion {
            version: source.to_string(),
        };

        if !source.is_development() {
            return Err(malformed());
        }

        let next_development = source.next_development().ok_or_else(malformed)?;

        Ok(Self {
            source,
            release: source.to_release(),
            next_development,
        })
    }
}
