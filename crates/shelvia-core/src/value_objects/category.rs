//! Defect category - closed set of defect classifications
//!
//! Wire labels are the Turkish names used by the shop-floor clients
//! (`mekanik`, `elektrik`, `proses`, `diger`). English names are accepted
//! as input aliases.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Defect category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "mekanik", alias = "mechanical")]
    Mechanical,
    #[serde(rename = "elektrik", alias = "electrical")]
    Electrical,
    #[serde(rename = "proses", alias = "process")]
    Process,
    #[serde(rename = "diger", alias = "other")]
    Other,
}

impl Category {
    /// All categories, in declaration order
    pub const ALL: [Category; 4] = [
        Category::Mechanical,
        Category::Electrical,
        Category::Process,
        Category::Other,
    ];

    /// Wire/storage label
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mechanical => "mekanik",
            Self::Electrical => "elektrik",
            Self::Process => "proses",
            Self::Other => "diger",
        }
    }

    const fn english_alias(self) -> &'static str {
        match self {
            Self::Mechanical => "mechanical",
            Self::Electrical => "electrical",
            Self::Process => "process",
            Self::Other => "other",
        }
    }
}

/// Error when parsing an unknown category label
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct CategoryParseError(pub String);

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s || c.english_alias() == s)
            .ok_or_else(|| CategoryParseError(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
