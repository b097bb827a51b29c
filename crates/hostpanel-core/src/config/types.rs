//! Configuration type definitions for hostpanel.
//!
//! These types are serialized/deserialized from TOML config files.
//!
//! # Example Configuration
//!
//! ```toml
//! [api]
//! base_url = "https://panel-api.example.com"
//! timeout_secs = 30
//!
//! [notify]
//! desktop = true
//! locale = "id"
//! ```

use serde::{Deserialize, Serialize};

use crate::notify::messages::Locale;

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.hostpanel/config.toml`
/// 2. Project config: `./.hostpanel/config.toml`
///
/// Project config values override user config values. The
/// `HOSTPANEL_API_URL` environment variable overrides both.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PanelConfig {
    /// Backend connection settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Toast and prompt settings
    #[serde(default)]
    pub notify: NotifyConfig,
}

/// Backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ApiConfig {
    /// Base URL of the REST backend, without trailing slash.
    /// Default: `http://localhost:3000`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds. Unset means the HTTP client default
    /// (no timeout).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// Notification settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct NotifyConfig {
    /// Also send toasts as desktop notifications (best-effort).
    /// Unset means off.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desktop: Option<bool>,

    /// Language of toast and prompt texts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
}
