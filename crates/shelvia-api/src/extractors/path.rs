//! Path parameter extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use shelvia_core::DefectId;

use crate::response::ApiError;

/// `Path` with rejections mapped to `INVALID_PATH_PARAMETER`
#[derive(Debug, Clone)]
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(inner) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        Ok(ApiPath(inner))
    }
}

/// Path parameters with defect_id
#[derive(Debug, Deserialize)]
pub struct DefectIdPath {
    pub defect_id: i64,
}

impl DefectIdPath {
    pub fn defect_id(&self) -> DefectId {
        DefectId::new(self.defect_id)
    }
}

/// Path parameters with defect_id and a stored filename
#[derive(Debug, Deserialize)]
pub struct DefectFilePath {
    pub defect_id: i64,
    pub filename: String,
}

impl DefectFilePath {
    pub fn defect_id(&self) -> DefectId {
        DefectId::new(self.defect_id)
    }
}
