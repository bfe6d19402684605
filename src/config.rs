use std::{net::SocketAddr, path::{Path, PathBuf}};

use anyhow::Context;

use crate::{
    effects::shadow::ShadowParams,
    foundation::error::{ChromeifyError, ChromeifyResult},
};

/// Settings for `chromeify serve`. Loaded once at startup, optionally from a
/// JSON file, then overridden by command-line flags.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Largest accepted request body, in bytes.
    pub max_upload_bytes: usize,
    /// Directory holding the eight tile images; the bundled theme when unset.
    pub theme_dir: Option<PathBuf>,
    /// Shadow used when a request asks for `dropshadow=true`.
    pub shadow: ShadowParams,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            max_upload_bytes: 32 << 20,
            theme_dir: None,
            shadow: ShadowParams::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_json_str(s: &str) -> ChromeifyResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| ChromeifyError::validation(format!("parse server config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> ChromeifyResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    pub fn validate(&self) -> ChromeifyResult<()> {
        if self.max_upload_bytes == 0 {
            return Err(ChromeifyError::validation("max_upload_bytes must be > 0"));
        }
        self.shadow.validate()
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
