//! Defect ID - store-assigned integer identifier of a defect record

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a defect record, assigned by the store on insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DefectId(i64);

impl DefectId {
    /// Create a DefectId from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

/// Error when parsing a DefectId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DefectIdParseError {
    #[error("invalid defect id format")]
    InvalidFormat,
}

impl fmt::Display for DefectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DefectId {
    type Err = DefectIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(DefectId)
            .map_err(|_| DefectIdParseError::InvalidFormat)
    }
}

impl From<i64> for DefectId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<DefectId> for i64 {
    fn from(id: DefectId) -> Self {
        id.0
    }
}
