//! The parsed representation of a version string

use std::str::FromStr;

use crate::identifier::Identifier;
use crate::{MalformedVersion, VersionParser};

/// A semantic version broken into its structural parts.
///
/// Values only come out of [`VersionParser::parse`] or [`ParsedVersion::new`],
/// so every instance satisfies the grammar: no leading zeros in the core
/// segments or in numeric pre-release identifiers. There are no setters.
///
/// `major`, `minor` and `patch` are `u64`; a core segment larger than
/// `u64::MAX` is rejected with [`MalformedReason::Overflow`]. Pre-release and
/// build identifiers have no such limit.
///
/// [`MalformedReason::Overflow`]: crate::MalformedReason::Overflow
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedVersion {
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: Vec<Identifier>,
    build: Vec<String>,
}

impl ParsedVersion {
    /// A release version with no pre-release or build identifiers.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease: Vec::new(),
            build: Vec::new(),
        }
    }

    pub(crate) fn from_parts(
        major: u64,
        minor: u64,
        patch: u64,
        prerelease: Vec<Identifier>,
        build: Vec<String>,
    ) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease,
            build,
        }
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Pre-release identifiers, empty when the version had no `-` suffix.
    pub fn prerelease(&self) -> &[Identifier] {
        &self.prerelease
    }

    /// Build metadata identifiers exactly as written, empty when there was no `+` suffix.
    pub fn build(&self) -> &[String] {
        &self.build
    }

    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }
}

impl std::fmt::Display for ParsedVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;

        for (i, ident) in self.prerelease.iter().enumerate() {
            f.write_str(if i == 0 { "-" } else { "." })?;
            write!(f, "{}", ident)?;
        }

        if !self.build.is_empty() {
            write!(f, "+{}", self.build.join("."))?;
        }

        Ok(())
    }
}

impl FromStr for ParsedVersion {
    type Err = MalformedVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VersionParser::new().parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ParsedVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ParsedVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_release() {
        let version = ParsedVersion::new(4, 3, 2);
        assert_eq!(version.major(), 4);
        assert_eq!(version.minor(), 3);
        assert_eq!(version.patch(), 2);
        assert!(version.prerelease().is_empty());
        assert!(version.build().is_empty());
        assert!(!version.is_prerelease());
        assert_eq!(version.to_string(), "4.3.2");
    }

    #[test]
    fn test_display_canonical() {
        let version = ParsedVersion::from_parts(
            1,
            0,
            0,
            vec![Identifier::AlphaNumeric("rc".to_string()), Identifier::Numeric("1".to_string())],
            vec!["build".to_string(), "007".to_string()],
        );
        assert_eq!(version.to_string(), "1.0.0-rc.1+build.007");

        let build_only = ParsedVersion::from_parts(0, 0, 1, Vec::new(), vec!["sha-1".to_string()]);
        assert_eq!(build_only.to_string(), "0.0.1+sha-1");
    }

    #[test]
    fn test_from_str() {
        let version: ParsedVersion = "2.10.0-beta".parse().unwrap();
        assert_eq!(version.minor(), 10);
        assert!(version.is_prerelease());

        assert!("2.10".parse::<ParsedVersion>().is_err());
    }

    #[test]
    fn test_equality_includes_build() {
        let a: ParsedVersion = "1.2.3+a".parse().unwrap();
        let b: ParsedVersion = "1.2.3+b".parse().unwrap();
        assert_ne!(a, b);
        assert_eq!(a, "1.2.3+a".parse().unwrap());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_string() {
        let version: ParsedVersion = "1.0.0-alpha.1+exp".parse().unwrap();
        let json = serde_json::to_string(&version).unwrap();
        assert_eq!(json, "\"1.0.0-alpha.1+exp\"");

        let back: ParsedVersion = serde_json::from_str(&json).unwrap();
        assert_eq!(back, version);

        let err = serde_json::from_str::<ParsedVersion>("\"1.2\"").unwrap_err();
        assert!(err.to_string().contains("missing patch segment"));
    }
}
