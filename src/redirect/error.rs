use thiserror::Error;

/// Redirect list decoding errors
///
/// The underlying decoder error is kept as the `source()` so callers can
/// report line/column details.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid YAML redirect list: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON redirect list: {0}")]
    Json(#[from] serde_json::Error),
}
