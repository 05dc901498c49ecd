use super::models::Config;
use crate::redirect::RedirectEntry;
use axum::http::HeaderValue;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Redirect #{index} has an empty path")]
    EmptyPath { index: usize },

    #[error("Redirect path '{path}' must start with '/'")]
    RelativePath { path: String },

    #[error("Redirect for '{path}' has an empty url")]
    EmptyUrl { path: String },

    #[error("Redirect url for '{path}' is not a valid Location header: {url:?}")]
    InvalidUrl { path: String, url: String },
}

/// Validate the entire configuration
pub fn validate(config: &Config) -> Result<(), ValidationError> {
    validate_entries(&config.redirects)?;
    Ok(())
}

/// Check that every entry can actually be served as a redirect
///
/// Decoding alone accepts records with missing fields; this is the strict
/// check applied to the inline table and, with `source.strict`, to the
/// redirect file.
pub fn validate_entries(entries: &[RedirectEntry]) -> Result<(), ValidationError> {
    for (index, entry) in entries.iter().enumerate() {
        if entry.path.is_empty() {
            return Err(ValidationError::EmptyPath { index });
        }

        if !entry.path.starts_with('/') {
            return Err(ValidationError::RelativePath {
                path: entry.path.clone(),
            });
        }

        if entry.url.is_empty() {
            return Err(ValidationError::EmptyUrl {
                path: entry.path.clone(),
            });
        }

        if HeaderValue::from_bytes(entry.url.as_bytes()).is_err() {
            return Err(ValidationError::InvalidUrl {
                path: entry.path.clone(),
                url: entry.url.clone(),
            });
        }
    }

    Ok(())
}
