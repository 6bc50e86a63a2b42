//! Axum extractors for request handling
//!
//! Custom extractors for API key checks, validation, query strings and paths.

mod api_key;
mod path;
mod query;
mod validated;

pub use api_key::{ApiKey, ReadAccess, XApiKey};
pub use path::{ApiPath, DefectFilePath, DefectIdPath};
pub use query::ApiQuery;
pub use validated::ValidatedJson;
