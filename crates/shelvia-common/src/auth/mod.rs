//! Authentication utilities

mod api_key;

pub use api_key::{ApiKeyVerifier, API_KEY_HEADER};
