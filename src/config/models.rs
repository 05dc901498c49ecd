use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::redirect::{Format, RedirectEntry};

/// Top-level configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub source: SourceConfig,
    /// Inline redirect table, consulted after the redirect file
    #[serde(default = "default_redirects")]
    pub redirects: Vec<RedirectEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            source: SourceConfig::default(),
            redirects: default_redirects(),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    "0.0.0.0:8080".parse().unwrap()
}

/// Optional redirect file layered on top of the inline table
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SourceConfig {
    pub yaml: Option<PathBuf>,
    pub json: Option<PathBuf>,
    /// Reject file entries with empty or malformed paths/urls
    #[serde(default)]
    pub strict: bool,
}

/// Redirect file chosen from [`SourceConfig`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectFile {
    pub path: PathBuf,
    pub format: Format,
}

impl SourceConfig {
    /// The file to load, if any. YAML takes precedence over JSON.
    pub fn redirect_file(&self) -> Option<RedirectFile> {
        if let Some(path) = &self.yaml {
            if self.json.is_some() {
                tracing::warn!(
                    yaml = %path.display(),
                    "Both YAML and JSON redirect files configured, ignoring JSON"
                );
            }
            return Some(RedirectFile {
                path: path.clone(),
                format: Format::Yaml,
            });
        }

        self.json.as_ref().map(|path| RedirectFile {
            path: path.clone(),
            format: Format::Json,
        })
    }
}

fn default_redirects() -> Vec<RedirectEntry> {
    vec![
        RedirectEntry::new(
            "/urlshort-godoc",
            "https://godoc.org/github.com/gophercises/urlshort",
        ),
        RedirectEntry::new("/yaml-godoc", "https://godoc.org/gopkg.in/yaml.v2"),
    ]
}
