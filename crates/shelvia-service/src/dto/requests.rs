//! Request DTOs for API endpoints
//!
//! Body DTOs implement `Deserialize` and `Validate`; query DTOs are turned
//! into store queries by the services.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shelvia_core::traits::{AuditQuery, DefectQuery, DEFAULT_PAGE_LIMIT};
use shelvia_core::{validate_title, Category, DefectPatch, DomainError, Patch};
use validator::{Validate, ValidationError};

fn validation_error(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

fn validate_title_field(title: &str) -> Result<(), ValidationError> {
    validate_title(title).map_err(|e| validation_error("title", e.to_string()))
}

fn validate_category_label(label: &str) -> Result<(), ValidationError> {
    label
        .parse::<Category>()
        .map(|_| ())
        .map_err(|e| validation_error("category", e.to_string()))
}

fn parse_category(label: Option<&str>) -> Result<Option<Category>, DomainError> {
    label
        .map(|l| l.parse::<Category>().map_err(|e| DomainError::InvalidCategory(e.0)))
        .transpose()
}

// ============================================================================
// Defect Requests
// ============================================================================

/// Create defect request
///
/// Serialized as-is into the `create_defect` audit payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_create_category"))]
pub struct CreateDefectRequest {
    #[validate(custom(function = "validate_title_field"))]
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Category label (`mekanik`, `elektrik`, `proses`, `diger` or the English names)
    #[serde(default)]
    pub category: Option<String>,
}

fn validate_create_category(request: &CreateDefectRequest) -> Result<(), ValidationError> {
    match request.category.as_deref() {
        Some(label) => validate_category_label(label),
        None => Ok(()),
    }
}

impl CreateDefectRequest {
    /// Parsed category
    pub fn category(&self) -> Result<Option<Category>, DomainError> {
        parse_category(self.category.as_deref())
    }
}

/// Partial update request
///
/// Each field distinguishes "absent" from explicit `null`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateDefectRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_patch_title"))]
    pub title: Patch<String>,

    #[serde(default)]
    pub description: Patch<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_patch_category"))]
    pub category: Patch<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_patch_status"))]
    pub status: Patch<String>,

    #[serde(default)]
    pub resolved_at: Patch<DateTime<Utc>>,
}

fn validate_patch_title(title: &Patch<String>) -> Result<(), ValidationError> {
    match title {
        Patch::Absent => Ok(()),
        Patch::Null => Err(validation_error("title", "title cannot be null")),
        Patch::Value(title) => validate_title_field(title),
    }
}

fn validate_patch_status(status: &Patch<String>) -> Result<(), ValidationError> {
    match status {
        Patch::Null => Err(validation_error("status", "status cannot be null")),
        Patch::Value(status) if status.trim().is_empty() => {
            Err(validation_error("status", "status cannot be empty"))
        }
        _ => Ok(()),
    }
}

fn validate_patch_category(category: &Patch<String>) -> Result<(), ValidationError> {
    match category {
        Patch::Value(label) => validate_category_label(label),
        _ => Ok(()),
    }
}

impl UpdateDefectRequest {
    /// Convert into a domain patch
    pub fn into_patch(self) -> Result<DefectPatch, DomainError> {
        let category = match self.category {
            Patch::Absent => Patch::Absent,
            Patch::Null => Patch::Null,
            Patch::Value(label) => Patch::from(parse_category(Some(&label))?),
        };

        let patch = DefectPatch {
            title: self.title,
            description: self.description,
            category,
            status: self.status,
            resolved_at: self.resolved_at,
        };
        patch.validate()?;
        Ok(patch)
    }
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Query string of `GET /defect`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListDefectsParams {
    pub status: Option<String>,
    pub category: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Blank query values (`?status=`) mean no filter
fn filter_value(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl ListDefectsParams {
    /// Build the store query, validating page bounds and category
    pub fn to_query(&self) -> Result<DefectQuery, DomainError> {
        let category = parse_category(filter_value(self.category.as_deref()))?;
        DefectQuery::paged(
            filter_value(self.status.as_deref()).map(ToString::to_string),
            category,
            self.page.unwrap_or(1),
            self.limit.unwrap_or(DEFAULT_PAGE_LIMIT),
        )
    }
}

/// Query string of `GET /audit`
#[derive(Debug, Clone, Copy, Default, Deserialize, Validate)]
pub struct AuditListParams {
    #[validate(range(min = 1, max = 500, message = "limit must be between 1 and 500"))]
    pub limit: Option<i64>,
    #[validate(range(min = 0, message = "offset cannot be negative"))]
    pub offset: Option<i64>,
}

impl AuditListParams {
    pub fn to_query(self) -> Result<AuditQuery, DomainError> {
        AuditQuery::new(
            self.limit.unwrap_or(DEFAULT_PAGE_LIMIT),
            self.offset.unwrap_or(0),
        )
    }
}
