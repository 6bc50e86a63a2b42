//! API key extractors
//!
//! Reads the `x-api-key` header and checks it against the configured secret.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{request::Parts, HeaderName, HeaderValue},
};
use axum_extra::{headers, TypedHeader};
use shelvia_common::API_KEY_HEADER;

use crate::response::ApiError;
use crate::state::AppState;

static X_API_KEY: HeaderName = HeaderName::from_static(API_KEY_HEADER);

/// Typed `x-api-key` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XApiKey(pub String);

impl headers::Header for XApiKey {
    fn name() -> &'static HeaderName {
        &X_API_KEY
    }

    fn decode<'i, I>(values: &mut I) -> Result<Self, headers::Error>
    where
        I: Iterator<Item = &'i HeaderValue>,
    {
        let value = values.next().ok_or_else(headers::Error::invalid)?;
        let token = value.to_str().map_err(|_| headers::Error::invalid())?;
        Ok(Self(token.to_string()))
    }

    fn encode<E: Extend<HeaderValue>>(&self, values: &mut E) {
        if let Ok(value) = HeaderValue::from_str(&self.0) {
            values.extend(std::iter::once(value));
        }
    }
}

/// Caller authenticated by API key
///
/// The key itself is the actor recorded in the audit log.
#[derive(Debug, Clone)]
pub struct ApiKey {
    pub actor: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for ApiKey
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header = TypedHeader::<XApiKey>::from_request_parts(parts, state)
            .await
            .ok()
            .map(|TypedHeader(XApiKey(token))| token);

        let app_state = AppState::from_ref(state);
        let actor = app_state
            .api_keys()
            .verify(header.as_deref())
            .map_err(|e| {
                tracing::warn!(error = %e, "API key rejected");
                e
            })?
            .to_string();

        Ok(ApiKey { actor })
    }
}

/// Access to defect reads
///
/// Public unless `AUTH_PROTECT_READS` is enabled, in which case it behaves
/// like [`ApiKey`].
#[derive(Debug, Clone)]
pub struct ReadAccess(pub Option<ApiKey>);

#[async_trait]
impl<S> FromRequestParts<S> for ReadAccess
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if !AppState::from_ref(state).protect_reads() {
            return Ok(ReadAccess(None));
        }

        let key = ApiKey::from_request_parts(parts, state).await?;
        Ok(ReadAccess(Some(key)))
    }
}
