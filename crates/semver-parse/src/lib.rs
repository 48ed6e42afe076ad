//! Strict semantic version parsing
//!
//! This crate splits a version string of the form
//! `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]` into its structural parts and
//! rejects anything that does not follow the semantic versioning grammar.
//!
//! ```
//! let version = semver_parse::parse("4.3.2").unwrap();
//! assert_eq!(version.major(), 4);
//!
//! assert!(semver_parse::parse("01.2.3").is_err());
//! ```

mod error;
mod identifier;
mod semver;
mod version;
mod version_parser;

pub use error::{Field, MalformedReason, MalformedVersion, Part};
pub use identifier::Identifier;
pub use semver::Semver;
pub use version::ParsedVersion;
pub use version_parser::VersionParser;

/// Parse a version string with the strict default parser.
pub fn parse(version: &str) -> Result<ParsedVersion, MalformedVersion> {
    Semver::parse(version)
}

/// Parse a version string and return its major component.
pub fn major(version: &str) -> Result<u64, MalformedVersion> {
    Semver::major(version)
}
