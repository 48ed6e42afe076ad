//! Error types for version parsing

use thiserror::Error;

/// One of the three dotted core segments of a version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Major,
    Minor,
    Patch,
}

impl Field {
    /// Core segments in the order they appear in a version string.
    pub const ALL: [Field; 3] = [Field::Major, Field::Minor, Field::Patch];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Major => "major",
            Field::Minor => "minor",
            Field::Patch => "patch",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The optional dot-separated suffixes of a version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    Prerelease,
    Build,
}

impl Part {
    pub fn as_str(&self) -> &'static str {
        match self {
            Part::Prerelease => "pre-release",
            Part::Build => "build metadata",
        }
    }
}

impl std::fmt::Display for Part {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Why a version string was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    #[error("empty version string")]
    Empty,
    #[error("missing {0} segment")]
    MissingSegment(Field),
    #[error("expected 3 core segments, found {0}")]
    TooManySegments(usize),
    #[error("empty {0} segment")]
    EmptySegment(Field),
    #[error("non-numeric {0} segment")]
    NonNumeric(Field),
    #[error("leading zero in {0} segment")]
    LeadingZero(Field),
    #[error("{0} segment exceeds u64")]
    Overflow(Field),
    #[error("empty pre-release after '-'")]
    EmptyPrerelease,
    #[error("empty build metadata after '+'")]
    EmptyBuild,
    #[error("empty {0} identifier")]
    EmptyIdentifier(Part),
    #[error("invalid character in {part} identifier \"{identifier}\"")]
    InvalidCharacter { part: Part, identifier: String },
    #[error("leading zero in numeric pre-release identifier \"{0}\"")]
    PrereleaseLeadingZero(String),
}

/// Returned when an input does not match `MAJOR.MINOR.PATCH[-PRE][+BUILD]`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid version string \"{input}\": {reason}")]
pub struct MalformedVersion {
    input: String,
    reason: MalformedReason,
}

impl MalformedVersion {
    pub fn new(input: impl Into<String>, reason: MalformedReason) -> Self {
        Self {
            input: input.into(),
            reason,
        }
    }

    /// The string as it was handed to the parser, before any trimming.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn reason(&self) -> &MalformedReason {
        &self.reason
    }
}
