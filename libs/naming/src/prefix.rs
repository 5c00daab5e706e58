//! Environment/region prefix validation.
//!
//! A prefix looks like `xx-d-itn` or `xx-p-weu-extra`: two letters for the
//! product, an environment letter (`d`, `u`, `p`), a region code (`itn`,
//! `weu`), and an optional lowercase suffix.

use std::sync::OnceLock;

use regex::Regex;

use crate::NamingError;

/// Full-string pattern a prefix must match.
pub const PREFIX_PATTERN: &str = r"^[a-z]{2}-(d|u|p)-(itn|weu)(-[a-z]+)?$";

fn prefix_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PREFIX_PATTERN).ok()).as_ref()
}

/// A validated naming prefix.
///
/// The stored value is always lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Prefix(String);

impl Prefix {
    /// Parses and validates a prefix.
    ///
    /// ASCII case is normalized before matching, so `AB-D-ITN` is accepted
    /// as `ab-d-itn`.
    pub fn parse(s: &str) -> Result<Self, NamingError> {
        let normalized = s.to_ascii_lowercase();

        // A pattern that fails to compile is reported like a mismatch.
        let Some(re) = prefix_regex() else {
            return Err(NamingError::InvalidPrefix);
        };

        if !re.is_match(&normalized) {
            return Err(NamingError::InvalidPrefix);
        }

        Ok(Self(normalized))
    }

    /// Returns the prefix as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the prefix with every hyphen removed.
    #[must_use]
    pub fn compact(&self) -> String {
        self.0.replace('-', "")
    }
}

impl AsRef<str> for Prefix {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Prefix {
    type Err = NamingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
