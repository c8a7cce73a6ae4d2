//! Presentation order selected for features, tags and steps.

use serde::{Deserialize, Serialize};

/// Sorting strategy applied to every overview of a report run.
///
/// Values read from configuration are parsed leniently: anything that is not
/// a known strategy is kept verbatim in [`SortingMethod::Unsupported`] so the
/// sorting engine can reject it at the point of use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortingMethod {
    /// Order supplied by the source collection
    #[default]
    Natural,
    /// Ascending by display name
    Alphabetical,
    /// Unrecognised configuration value
    Unsupported(String),
}

impl SortingMethod {
    /// Parse a configuration value, case-insensitively.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "natural" => Self::Natural,
            "alphabetical" => Self::Alphabetical,
            _ => Self::Unsupported(s.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Natural => "NATURAL",
            Self::Alphabetical => "ALPHABETICAL",
            Self::Unsupported(value) => value.as_str(),
        }
    }
}

impl std::fmt::Display for SortingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for SortingMethod {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<SortingMethod> for String {
    fn from(method: SortingMethod) -> Self {
        method.as_str().to_string()
    }
}
