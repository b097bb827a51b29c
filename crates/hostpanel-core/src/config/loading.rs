//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.hostpanel/config.toml` (global user preferences)
//! 3. **Project config** - `./.hostpanel/config.toml` (directory-specific overrides)
//! 4. **Environment** - `HOSTPANEL_API_URL`
//! 5. **CLI arguments** - Command-line flags (highest priority)

use std::fs;
use std::path::Path;

use crate::config::defaults::{API_URL_ENV, panel_dir};
use crate::config::types::{ApiConfig, NotifyConfig, PanelConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

/// Check if an error is a "file not found" error.
fn is_file_not_found(e: &(dyn std::error::Error + 'static)) -> bool {
    if let Some(io_err) = e.downcast_ref::<std::io::Error>() {
        return io_err.kind() == std::io::ErrorKind::NotFound;
    }

    let err_str = e.to_string();
    err_str.contains("No such file or directory") || err_str.contains("cannot find the path")
}

/// Load configuration from the hierarchy of config files and the environment.
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be parsed, or if the
/// merged configuration fails validation. Missing config files are not errors.
pub fn load_hierarchy() -> Result<PanelConfig, Box<dyn std::error::Error>> {
    let mut config = PanelConfig::default();

    match load_config_file(&panel_dir().join("config.toml")) {
        Ok(user_config) => config = merge_configs(config, user_config),
        Err(e) if !is_file_not_found(e.as_ref()) => return Err(e),
        Err(_) => {}
    }

    let project_path = std::env::current_dir()?
        .join(".hostpanel")
        .join("config.toml");
    match load_config_file(&project_path) {
        Ok(project_config) => config = merge_configs(config, project_config),
        Err(e) if !is_file_not_found(e.as_ref()) => return Err(e),
        Err(_) => {}
    }

    config = apply_env_overrides(config, std::env::var(API_URL_ENV).ok());

    validate_config(&config)?;

    tracing::debug!(
        event = "core.config.loaded",
        base_url = ?config.api.base_url,
        timeout_secs = ?config.api.timeout_secs,
        desktop = config.desktop_notifications()
    );

    Ok(config)
}

/// Load a configuration file from the given path.
fn load_config_file(path: &Path) -> Result<PanelConfig, Box<dyn std::error::Error>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        // Keep the io::Error intact so the caller can tell "missing" from "broken".
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(Box::new(e)),
        Err(e) => return Err(Box::new(ConfigError::from(e))),
    };
    let config: PanelConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
            message: format!("'{}': {}", path.display(), e),
        })?;
    Ok(config)
}

/// Merge two configurations, with `override_config` taking precedence.
///
/// Optional values are replaced only when the override sets them.
pub fn merge_configs(base: PanelConfig, override_config: PanelConfig) -> PanelConfig {
    PanelConfig {
        api: ApiConfig {
            base_url: override_config.api.base_url.or(base.api.base_url),
            timeout_secs: override_config.api.timeout_secs.or(base.api.timeout_secs),
        },
        notify: NotifyConfig {
            desktop: override_config.notify.desktop.or(base.notify.desktop),
            locale: override_config.notify.locale.or(base.notify.locale),
        },
    }
}

/// Apply the `HOSTPANEL_API_URL` value, ignoring it when empty.
pub fn apply_env_overrides(mut config: PanelConfig, api_url: Option<String>) -> PanelConfig {
    if let Some(url) = api_url
        && !url.trim().is_empty()
    {
        config.api.base_url = Some(url.trim().to_string());
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::messages::Locale;

    #[test]
    fn test_merge_configs_override_wins() {
        let base = PanelConfig {
            api: ApiConfig {
                base_url: Some("http://user.local".to_string()),
                timeout_secs: Some(10),
            },
            notify: NotifyConfig {
                desktop: None,
                locale: Some(Locale::En),
            },
        };
        let project = PanelConfig {
            api: ApiConfig {
                base_url: Some("http://project.local".to_string()),
                timeout_secs: None,
            },
            notify: NotifyConfig {
                desktop: Some(true),
                locale: None,
            },
        };

        let merged = merge_configs(base, project);
        assert_eq!(merged.api.base_url.as_deref(), Some("http://project.local"));
        assert_eq!(merged.api.timeout_secs, Some(10));
        assert!(merged.desktop_notifications());
        assert_eq!(merged.notify.locale, Some(Locale::En));
    }

    #[test]
    fn test_project_config_can_disable_desktop_notifications() {
        let mut user = PanelConfig::default();
        user.notify.desktop = Some(true);
        let mut project = PanelConfig::default();
        project.notify.desktop = Some(false);

        let merged = merge_configs(user.clone(), project);
        assert_eq!(merged.notify.desktop, Some(false));
        assert!(!merged.desktop_notifications());

        let inherited = merge_configs(user, PanelConfig::default());
        assert!(inherited.desktop_notifications());
    }

    #[test]
    fn test_merge_configs_keeps_base_when_override_empty() {
        let base = PanelConfig {
            api: ApiConfig {
                base_url: Some("http://user.local".to_string()),
                timeout_secs: None,
            },
            notify: NotifyConfig::default(),
        };
        let merged = merge_configs(base.clone(), PanelConfig::default());
        assert_eq!(merged, base);
    }

    #[test]
    fn test_apply_env_overrides_sets_base_url() {
        let config = apply_env_overrides(
            PanelConfig::default(),
            Some("https://env.example.com".to_string()),
        );
        assert_eq!(
            config.api.base_url.as_deref(),
            Some("https://env.example.com")
        );
    }

    #[test]
    fn test_apply_env_overrides_ignores_empty_value() {
        let mut base = PanelConfig::default();
        base.api.base_url = Some("http://file.local".to_string());

        let config = apply_env_overrides(base, Some("   ".to_string()));
        assert_eq!(config.api.base_url.as_deref(), Some("http://file.local"));
    }

    #[test]
    fn test_load_config_file_missing_is_not_found() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let err = load_config_file(&temp_dir.path().join("missing.toml")).unwrap_err();
        assert!(is_file_not_found(err.as_ref()));
    }

    #[test]
    fn test_load_config_file_invalid_toml_is_error() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "invalid toml [[[").unwrap();

        let err = load_config_file(&path).unwrap_err();
        assert!(!is_file_not_found(err.as_ref()));
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::ConfigParseError { .. })
        ));
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_config_file_valid() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[api]
base_url = "http://file.local"
timeout_secs = 3
"#,
        )
        .unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.api.base_url.as_deref(), Some("http://file.local"));
        assert_eq!(config.api.timeout_secs, Some(3));
        assert_eq!(config.notify.desktop, None);
    }
}
