//! Shared-secret API key check
//!
//! A single server-side secret guards every protected operation. The caller's
//! token is compared byte for byte; the token itself doubles as the actor
//! recorded in the audit log.

use crate::error::AppError;

/// Request header carrying the API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Verifies caller tokens against the configured secret
#[derive(Clone, Default)]
pub struct ApiKeyVerifier {
    expected: Option<String>,
}

impl ApiKeyVerifier {
    /// Create a verifier; an empty secret counts as not configured
    #[must_use]
    pub fn new(expected: Option<String>) -> Self {
        Self {
            expected: expected.filter(|s| !s.is_empty()),
        }
    }

    /// Check if a secret is configured on the server
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.expected.is_some()
    }

    /// Verify a caller token and return it as the request actor
    ///
    /// # Errors
    /// - `AppError::Config` if the server has no secret, whatever the token
    /// - `AppError::MissingApiKey` if no token was supplied
    /// - `AppError::InvalidApiKey` if the token does not match exactly
    pub fn verify<'a>(&self, token: Option<&'a str>) -> Result<&'a str, AppError> {
        let expected = self
            .expected
            .as_deref()
            .ok_or_else(|| AppError::Config("API key not configured on server".to_string()))?;

        match token {
            None | Some("") => Err(AppError::MissingApiKey),
            Some(token) if token == expected => Ok(token),
            Some(_) => Err(AppError::InvalidApiKey),
        }
    }
}

impl std::fmt::Debug for ApiKeyVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyVerifier")
            .field("configured", &self.is_configured())
            .finish_non_exhaustive()
    }
}
