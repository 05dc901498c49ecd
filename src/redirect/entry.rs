use serde::{Deserialize, Deserializer, Serialize};

use super::error::ParseError;

/// One `(path, url)` record from a redirect list
///
/// Missing or null fields decode as empty strings. Nothing here checks that `path`
/// looks like a path or that `url` is a usable target; see
/// [`crate::config::validate_entries`] for the strict check.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RedirectEntry {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub path: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl RedirectEntry {
    pub fn new(path: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            url: url.into(),
        }
    }
}

/// Redirect list encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Yaml,
    Json,
}

/// Decode a redirect list, keeping input order
pub fn parse(buf: &[u8], format: Format) -> Result<Vec<RedirectEntry>, ParseError> {
    match format {
        Format::Yaml => parse_yaml(buf),
        Format::Json => parse_json(buf),
    }
}

/// Decode a YAML sequence of `{path, url}` mappings
///
/// An empty document (or `~`) is an empty list.
pub fn parse_yaml(buf: &[u8]) -> Result<Vec<RedirectEntry>, ParseError> {
    if buf.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    let entries: Option<Vec<RedirectEntry>> = serde_yaml::from_slice(buf)?;
    Ok(entries.unwrap_or_default())
}

/// Decode a JSON array of `{"path", "url"}` objects
///
/// Unlike YAML, an empty buffer is an error; `null` is an empty list.
pub fn parse_json(buf: &[u8]) -> Result<Vec<RedirectEntry>, ParseError> {
    let entries: Option<Vec<RedirectEntry>> = serde_json::from_slice(buf)?;
    Ok(entries.unwrap_or_default())
}
