use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// A committed revision number. Subversion numbers commits from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "u64")]
pub struct Revision(u64);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid revision number: {0:?}")]
pub struct InvalidRevision(pub String);

impl Revision {
    pub fn new(number: u64) -> Option<Self> {
        (number > 0).then_some(Self(number))
    }

    pub fn get(self) -> u64 {
        self.0
    }

    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// The revision before this one, or None at r1
    pub fn previous(self) -> Option<Self> {
        Self::new(self.0 - 1)
    }

    /// Hyperlink target used by the HTML renderer, e.g. `r42`
    pub fn link_token(self) -> String {
        format!("r{}", self.0)
    }

    /// Parse a clicked link target of the form `r<digits>`.
    ///
    /// Anything else (other schemes, trailing text, r0) is not a revision link.
    pub fn from_link_token(token: &str) -> Option<Self> {
        let digits = token.strip_prefix('r')?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok().and_then(Self::new)
    }
}

impl TryFrom<u64> for Revision {
    type Error = InvalidRevision;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| InvalidRevision(value.to_string()))
    }
}

impl FromStr for Revision {
    type Err = InvalidRevision;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('r').unwrap_or(trimmed);
        digits
            .parse::<u64>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| InvalidRevision(s.to_string()))
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Forward so width/alignment flags apply to the number
        fmt::Display::fmt(&self.0, f)
    }
}
