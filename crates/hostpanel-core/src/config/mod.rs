//! # Configuration System
//!
//! Hierarchical TOML configuration for hostpanel.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.hostpanel/config.toml`
//! 3. **Project config** - `./.hostpanel/config.toml`
//! 4. **Environment** - `HOSTPANEL_API_URL`
//! 5. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use hostpanel_core::config::PanelConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PanelConfig::load_hierarchy()?;
//!     println!("talking to {}", config.base_url());
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

use std::time::Duration;

pub use defaults::{API_URL_ENV, DEFAULT_BASE_URL};
pub use types::{ApiConfig, NotifyConfig, PanelConfig};
pub use validation::validate_config;

use crate::notify::messages::Locale;

impl PanelConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, Box<dyn std::error::Error>> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }

    /// Resolved backend base URL, without trailing slash.
    pub fn base_url(&self) -> String {
        self.api
            .base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string()
    }

    /// Request timeout, if one is configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.api.timeout_secs.map(Duration::from_secs)
    }

    /// Whether toasts are also sent as desktop notifications.
    pub fn desktop_notifications(&self) -> bool {
        self.notify.desktop.unwrap_or(false)
    }

    /// Locale for toast and prompt texts.
    pub fn locale(&self) -> Locale {
        self.notify.locale.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_defaults() {
        assert_eq!(PanelConfig::default().base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_base_url_strips_trailing_slash() {
        let mut config = PanelConfig::default();
        config.api.base_url = Some("http://api.local/".to_string());
        assert_eq!(config.base_url(), "http://api.local");
    }

    #[test]
    fn test_timeout_unset_by_default() {
        assert!(PanelConfig::default().timeout().is_none());
    }
}
