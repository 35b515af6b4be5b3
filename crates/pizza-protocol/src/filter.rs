//! Wildcard filter patterns sent with list requests

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wildcard marker understood by the service
pub const WILDCARD: char = '*';

/// A name filter as transmitted to the service: `*` or `*text*`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterPattern(String);

impl FilterPattern {
    /// The match-everything pattern `*`
    pub fn match_all() -> Self {
        Self(WILDCARD.to_string())
    }

    /// Pattern matching names that contain `text`
    ///
    /// The text is wrapped verbatim; an empty input yields [`Self::match_all`].
    pub fn containing(text: &str) -> Self {
        if text.is_empty() {
            Self::match_all()
        } else {
            Self(format!("{WILDCARD}{text}{WILDCARD}"))
        }
    }

    /// Whether this pattern matches everything
    pub fn is_match_all(&self) -> bool {
        self.0.chars().all(|c| c == WILDCARD)
    }

    /// The text between the wildcards
    pub fn needle(&self) -> &str {
        self.0.trim_matches(WILDCARD)
    }

    /// The pattern as sent on the wire
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for FilterPattern {
    fn default() -> Self {
        Self::match_all()
    }
}

impl fmt::Display for FilterPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
