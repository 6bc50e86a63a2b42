//! Value objects - immutable domain primitives

mod category;
mod defect_id;
mod patch;

pub use category::{Category, CategoryParseError};
pub use defect_id::{DefectId, DefectIdParseError};
pub use patch::Patch;
