//! Defect entity <-> model mapper

use chrono::{DateTime, Utc};
use shelvia_core::entities::{Defect, NewDefect};
use shelvia_core::error::DomainError;
use shelvia_core::value_objects::{Category, DefectId};

use crate::models::DefectModel;

/// Convert DefectModel to Defect entity
///
/// Fails only if the row holds a category this build does not know.
impl TryFrom<DefectModel> for Defect {
    type Error = DomainError;

    fn try_from(model: DefectModel) -> Result<Self, Self::Error> {
        let category = model
            .category
            .as_deref()
            .map(str::parse::<Category>)
            .transpose()
            .map_err(|e| DomainError::DatabaseError(format!("corrupt row {}: {e}", model.id)))?;

        Ok(Defect {
            id: DefectId::new(model.id),
            title: model.title,
            description: model.description,
            category,
            status: model.status,
            created_at: model.created_at,
            resolved_at: model.resolved_at,
        })
    }
}

/// Values for inserting a new defect
pub struct DefectInsert<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub category: Option<&'static str>,
    pub status: &'a str,
    pub created_at: DateTime<Utc>,
}

impl<'a> DefectInsert<'a> {
    pub fn new(defect: &'a NewDefect) -> Self {
        Self {
            title: &defect.title,
            description: defect.description.as_deref(),
            category: defect.category.map(Category::as_str),
            status: &defect.status,
            created_at: defect.created_at,
        }
    }
}

/// Values for overwriting the mutable columns of a defect
pub struct DefectUpdate<'a> {
    pub id: i64,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub category: Option<&'static str>,
    pub status: &'a str,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl<'a> DefectUpdate<'a> {
    pub fn new(defect: &'a Defect) -> Self {
        Self {
            id: defect.id.into_inner(),
            title: &defect.title,
            description: defect.description.as_deref(),
            category: defect.category.map(Category::as_str),
            status: &defect.status,
            resolved_at: defect.resolved_at,
        }
    }
}
