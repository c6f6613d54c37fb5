use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;
use tracing::warn;

static CONFIG: OnceLock<HeadersConfig> = OnceLock::new();

/// Limits enforced by a [`HeaderMap`](crate::http::headers::HeaderMap).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HeadersConfig {
    /// Maximum number of distinct header names.
    pub max_headers: usize,

    /// Maximum size in bytes of a single stored value, after append merging.
    pub max_value_size: usize,
}

impl Default for HeadersConfig {
    fn default() -> Self {
        Self {
            max_headers: 128,
            max_value_size: 8192,
        }
    }
}

impl HeadersConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                warn!(path = %path.display(), %err, "fail to read config, fall back to default");
                return HeadersConfig::default();
            }
        };

        match toml::from_str::<HeadersConfig>(content.as_str()) {
            Ok(config) => config,
            Err(err) => {
                warn!(
                    path = %path.display(),
                    %err,
                    "fail to deserialize config, fall back to default"
                );
                HeadersConfig::default()
            }
        }
    }
}

/// Installs the process-wide default. Gives `cfg` back if one is already set.
pub fn set_config(cfg: HeadersConfig) -> Result<(), HeadersConfig> {
    CONFIG.set(cfg)
}

/// The process-wide default, or [`HeadersConfig::default`] when none was installed.
pub fn config() -> HeadersConfig {
    CONFIG.get().cloned().unwrap_or_default()
}
