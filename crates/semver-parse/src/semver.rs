//! Semver facade providing one-call version operations

use crate::{MalformedVersion, ParsedVersion, VersionParser};

/// Main facade for semantic version parsing with the strict grammar
pub struct Semver;

impl Semver {
    /// Parse a version string into its parts
    pub fn parse(version: &str) -> Result<ParsedVersion, MalformedVersion> {
        VersionParser::new().parse(version)
    }

    /// Return only the major component of a version
    pub fn major(version: &str) -> Result<u64, MalformedVersion> {
        Self::parse(version).map(|v| v.major())
    }

    /// Check if a string is a well-formed semantic version
    pub fn is_valid(version: &str) -> bool {
        VersionParser::new().is_valid(version)
    }
}
