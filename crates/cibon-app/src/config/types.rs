//! Configuration types
//!
//! Defines:
//! - `Settings` - Global application settings
//! - `ApiSettings` - Where the HAL API lives and which collection to show
//! - `UiSettings` - Display preferences

use serde::{Deserialize, Serialize};

/// Application settings (`~/.config/cibon/config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Root URL of the HAL API
    #[serde(default = "default_root")]
    pub root: String,

    /// Relation of the collection to browse, also its `_embedded` key
    #[serde(default = "default_collection_rel")]
    pub collection_rel: String,

    /// Per-request timeout in milliseconds
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            root: default_root(),
            collection_rel: default_collection_rel(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Records per page on startup
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Show the time of the last successful load in the status bar
    #[serde(default = "default_true")]
    pub show_timestamps: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            show_timestamps: true,
        }
    }
}

fn default_root() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_collection_rel() -> String {
    "farmers".to_string()
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

fn default_page_size() -> u32 {
    2
}

fn default_true() -> bool {
    true
}
