//! # Gallery configuration — `gallery.toml`
//!
//! Optional TOML file that points the gallery at a different profile endpoint,
//! such as a local mirror of the demo API (filename: [`GalleryConfig::filename`] =
//! `"gallery.toml"`). Native builds look for it in the platform config directory;
//! web builds always run with the defaults. The number of profiles per load is
//! not configurable; it is always [`DEFAULT_RESULTS`](crate::DEFAULT_RESULTS).
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! endpoint = "https://randomuser.me/api/"
//! ```
//!
//! All structs derive or implement `Default`, so a missing or empty file is
//! equivalent to the default configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Public demo endpoint serving random profiles.
pub const DEFAULT_ENDPOINT: &str = "https://randomuser.me/api/";

/// Top-level configuration stored in `gallery.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GalleryConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Remote profile API settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL; the `results` query parameter is appended per request.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

impl GalleryConfig {
    /// Create a config pointing at `endpoint`.
    pub fn new(endpoint: String) -> Self {
        Self {
            api: ApiConfig { endpoint },
        }
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "gallery.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&text)?)
    }
}
