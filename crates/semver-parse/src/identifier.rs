//! Pre-release and build identifiers

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{MalformedReason, Part};

lazy_static! {
    static ref IDENTIFIER_RE: Regex = Regex::new(r"^[0-9A-Za-z-]+$").unwrap();
    static ref NUMERIC_RE: Regex = Regex::new(r"^[0-9]+$").unwrap();
}

/// A single dot-separated pre-release identifier.
///
/// Numeric identifiers keep their digits as written; they have no leading
/// zeros and no upper bound.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    Numeric(String),
    AlphaNumeric(String),
}

impl Identifier {
    pub fn is_numeric(&self) -> bool {
        matches!(self, Identifier::Numeric(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Identifier::Numeric(s) | Identifier::AlphaNumeric(s) => s,
        }
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

/// True for digit strings like "01" that start with a redundant zero.
pub(crate) fn has_leading_zero(digits: &str) -> bool {
    digits.len() > 1 && digits.starts_with('0')
}

pub(crate) fn is_numeric(s: &str) -> bool {
    NUMERIC_RE.is_match(s)
}

fn check_identifier(part: Part, ident: &str) -> Result<(), MalformedReason> {
    if ident.is_empty() {
        return Err(MalformedReason::EmptyIdentifier(part));
    }
    if !IDENTIFIER_RE.is_match(ident) {
        return Err(MalformedReason::InvalidCharacter {
            part,
            identifier: ident.to_string(),
        });
    }
    Ok(())
}

/// Split and validate the text following the first `-`.
pub(crate) fn parse_prerelease(text: &str) -> Result<Vec<Identifier>, MalformedReason> {
    if text.is_empty() {
        return Err(MalformedReason::EmptyPrerelease);
    }

    text.split('.')
        .map(|ident| {
            check_identifier(Part::Prerelease, ident)?;
            if !is_numeric(ident) {
                return Ok(Identifier::AlphaNumeric(ident.to_string()));
            }
            if has_leading_zero(ident) {
                return Err(MalformedReason::PrereleaseLeadingZero(ident.to_string()));
            }
            Ok(Identifier::Numeric(ident.to_string()))
        })
        .collect()
}

/// Split and validate the text following the first `+`. Identifiers are kept verbatim.
pub(crate) fn parse_build(text: &str) -> Result<Vec<String>, MalformedReason> {
    if text.is_empty() {
        return Err(MalformedReason::EmptyBuild);
    }

    text.split('.')
        .map(|ident| {
            check_identifier(Part::Build, ident)?;
            Ok(ident.to_string())
        })
        .collect()
}
