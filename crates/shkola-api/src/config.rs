//! Client Configuration
//!
//! Where the REST API lives. The base URL is resolved in layers:
//! built-in default, then the `SHKOLA_API_BASE_URL` build-time variable,
//! then whatever the host page supplies at runtime.

use serde::{Deserialize, Serialize};

/// Base URL used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "/api/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL every endpoint path is joined onto
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Default config, overridden by `SHKOLA_API_BASE_URL` if it was set at build time.
    pub fn from_build_env() -> Self {
        match option_env!("SHKOLA_API_BASE_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    /// Replace the base URL when a non-empty override is given.
    pub fn with_override(mut self, base_url: Option<&str>) -> Self {
        if let Some(url) = base_url.map(str::trim).filter(|url| !url.is_empty()) {
            self.base_url = url.to_string();
        }
        self
    }

    /// Join an endpoint path (e.g. `classes/3?x=1`) onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }
}
