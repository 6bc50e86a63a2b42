//! Defect entity - a tracked fault/issue record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{Category, DefectId, Patch};

/// Status assigned to every new defect
pub const DEFAULT_STATUS: &str = "open";
/// Conventional status for a closed defect
pub const RESOLVED_STATUS: &str = "resolved";

/// Minimum title length in characters (after trimming)
pub const TITLE_MIN_LEN: usize = 3;
/// Maximum title length in characters (after trimming)
pub const TITLE_MAX_LEN: usize = 255;

/// Check a defect title against the length rules
pub fn validate_title(title: &str) -> Result<(), DomainError> {
    let len = title.trim().chars().count();
    if len < TITLE_MIN_LEN {
        return Err(DomainError::validation(format!(
            "title must be at least {TITLE_MIN_LEN} characters"
        )));
    }
    if len > TITLE_MAX_LEN {
        return Err(DomainError::validation(format!(
            "title must be at most {TITLE_MAX_LEN} characters"
        )));
    }
    Ok(())
}

/// Defect entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defect {
    pub id: DefectId,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<Category>,
    /// Free-text status; `"open"` on creation
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl Defect {
    #[inline]
    pub fn is_open(&self) -> bool {
        self.status == DEFAULT_STATUS
    }

    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.status == RESOLVED_STATUS
    }

    /// Apply a partial update in place
    ///
    /// Only fields present in the patch are touched. `id` and `created_at`
    /// are never modified.
    pub fn apply(&mut self, patch: DefectPatch) -> Result<(), DomainError> {
        patch.validate()?;

        if let Patch::Value(title) = patch.title {
            self.title = title;
        }
        patch.description.apply_to(&mut self.description);
        patch.category.apply_to(&mut self.category);
        if let Patch::Value(status) = patch.status {
            self.status = status;
        }
        patch.resolved_at.apply_to(&mut self.resolved_at);

        Ok(())
    }
}

/// A defect that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDefect {
    pub title: String,
    pub description: Option<String>,
    pub category: Option<Category>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl NewDefect {
    /// Create a new open defect, validating the title
    pub fn new(
        title: String,
        description: Option<String>,
        category: Option<Category>,
    ) -> Result<Self, DomainError> {
        validate_title(&title)?;

        Ok(Self {
            title,
            description,
            category,
            status: DEFAULT_STATUS.to_string(),
            created_at: Utc::now(),
        })
    }
}

/// Partial update for a defect
///
/// Serializes only the fields that are present, which makes it usable as the
/// audit payload of an update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefectPatch {
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub title: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub description: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub category: Patch<Category>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub status: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub resolved_at: Patch<DateTime<Utc>>,
}

impl DefectPatch {
    /// Check if the patch touches no field at all
    pub fn is_empty(&self) -> bool {
        self.title.is_absent()
            && self.description.is_absent()
            && self.category.is_absent()
            && self.status.is_absent()
            && self.resolved_at.is_absent()
    }

    /// Validate non-nullable fields and the title rule
    pub fn validate(&self) -> Result<(), DomainError> {
        match &self.title {
            Patch::Null => return Err(DomainError::validation("title cannot be null")),
            Patch::Value(title) => validate_title(title)?,
            Patch::Absent => {}
        }
        if matches!(self.status, Patch::Null) {
            return Err(DomainError::validation("status cannot be null"));
        }
        Ok(())
    }

    /// Stamp `resolved_at` when the patch resolves a defect that was not resolved
    ///
    /// An explicit `resolved_at` in the patch (value or null) always wins.
    pub fn with_resolution_stamp(mut self, current: &Defect, now: DateTime<Utc>) -> Self {
        let resolves = self
            .status
            .as_value()
            .is_some_and(|s| s == RESOLVED_STATUS);

        if resolves && !current.is_resolved() && self.resolved_at.is_absent() {
            self.resolved_at = Patch::Value(now);
        }
        self
    }
}
