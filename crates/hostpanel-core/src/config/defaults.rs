//! Default values for configuration types.

use std::path::PathBuf;

/// Base URL used when neither config files nor the environment provide one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Environment variable overriding `api.base_url`.
pub const API_URL_ENV: &str = "HOSTPANEL_API_URL";

/// Base directory for hostpanel data (default: ~/.hostpanel).
///
/// Falls back to the system temp dir when no home directory can be found.
pub fn panel_dir() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(".hostpanel"),
        None => {
            tracing::warn!(
                event = "core.config.home_dir_not_found",
                "Could not find home directory, using temp dir"
            );
            std::env::temp_dir().join(".hostpanel")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_dir_ends_with_hostpanel() {
        assert!(panel_dir().ends_with(".hostpanel"));
    }

    #[test]
    fn test_default_base_url_is_http() {
        assert!(DEFAULT_BASE_URL.starts_with("http://"));
    }
}
