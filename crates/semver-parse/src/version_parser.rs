//! Version parsing module

use crate::error::{Field, MalformedReason, MalformedVersion};
use crate::identifier::{self, Identifier};
use crate::ParsedVersion;

/// Parses `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]` strings.
///
/// The default parser is strict and accepts exactly the semantic versioning
/// grammar. Two relaxations can be switched on:
///
/// * [`allow_prefix`](Self::allow_prefix) accepts a single leading `v` or `V`.
/// * [`trim_whitespace`](Self::trim_whitespace) ignores surrounding ASCII whitespace.
///
/// ```
/// use semver_parse::VersionParser;
///
/// let parser = VersionParser::new().allow_prefix(true);
/// assert_eq!(parser.parse("v4.3.2").unwrap().major(), 4);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VersionParser {
    allow_prefix: bool,
    trim_whitespace: bool,
}

impl VersionParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// A parser with every relaxation enabled.
    pub fn lenient() -> Self {
        Self::new().allow_prefix(true).trim_whitespace(true)
    }

    pub fn allow_prefix(mut self, allow: bool) -> Self {
        self.allow_prefix = allow;
        self
    }

    pub fn trim_whitespace(mut self, trim: bool) -> Self {
        self.trim_whitespace = trim;
        self
    }

    /// Parse a version string.
    ///
    /// The first `+` starts the build metadata and the first `-` before it
    /// starts the pre-release; any later `+` or `-` is part of those
    /// identifiers rather than a delimiter.
    pub fn parse(&self, input: &str) -> Result<ParsedVersion, MalformedVersion> {
        match self.parse_parts(input) {
            Ok(version) => {
                log::trace!(
                    "Parsed version \"{}\": major={} minor={} patch={} prerelease={:?} build={:?}",
                    input,
                    version.major(),
                    version.minor(),
                    version.patch(),
                    version.prerelease(),
                    version.build()
                );
                Ok(version)
            }
            Err(reason) => {
                log::debug!("Rejected version \"{}\": {}", input, reason);
                Err(MalformedVersion::new(input, reason))
            }
        }
    }

    /// Check whether a string would parse.
    pub fn is_valid(&self, input: &str) -> bool {
        self.parse_parts(input).is_ok()
    }

    fn parse_parts(&self, input: &str) -> Result<ParsedVersion, MalformedReason> {
        let mut text = input;
        if self.trim_whitespace {
            text = text.trim_matches(|c: char| c.is_ascii_whitespace());
        }
        if self.allow_prefix {
            text = text.strip_prefix(|c: char| c == 'v' || c == 'V').unwrap_or(text);
        }

        if text.is_empty() {
            return Err(MalformedReason::Empty);
        }

        let (rest, build) = match text.split_once('+') {
            Some((rest, build)) => (rest, Some(build)),
            None => (text, None),
        };
        let (core, prerelease) = match rest.split_once('-') {
            Some((core, pre)) => (core, Some(pre)),
            None => (rest, None),
        };

        let [major, minor, patch] = parse_core(core)?;
        let prerelease: Vec<Identifier> = match prerelease {
            Some(pre) => identifier::parse_prerelease(pre)?,
            None => Vec::new(),
        };
        let build = match build {
            Some(build) => identifier::parse_build(build)?,
            None => Vec::new(),
        };

        Ok(ParsedVersion::from_parts(major, minor, patch, prerelease, build))
    }
}

fn parse_core(core: &str) -> Result<[u64; 3], MalformedReason> {
    let segments: Vec<&str> = core.split('.').collect();
    if segments.len() > 3 {
        return Err(MalformedReason::TooManySegments(segments.len()));
    }

    let mut values = [0u64; 3];
    for (i, field) in Field::ALL.into_iter().enumerate() {
        let segment = segments.get(i).ok_or(MalformedReason::MissingSegment(field))?;
        values[i] = parse_numeric(field, segment)?;
    }
    Ok(values)
}

fn parse_numeric(field: Field, segment: &str) -> Result<u64, MalformedReason> {
    if segment.is_empty() {
        return Err(MalformedReason::EmptySegment(field));
    }
    if !identifier::is_numeric(segment) {
        return Err(MalformedReason::NonNumeric(field));
    }
    if identifier::has_leading_zero(segment) {
        return Err(MalformedReason::LeadingZero(field));
    }
    segment.parse::<u64>().map_err(|_| MalformedReason::Overflow(field))
}
