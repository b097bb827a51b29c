use crate::config::types::PanelConfig;
use crate::errors::ConfigError;

/// Validate a merged configuration.
///
/// # Errors
///
/// - `InvalidBaseUrl` if `api.base_url` does not parse as an http(s) URL with a host
/// - `InvalidConfiguration` if `api.timeout_secs` is zero
pub fn validate_config(config: &PanelConfig) -> Result<(), ConfigError> {
    if let Some(url) = &config.api.base_url
        && !is_http_url(url)
    {
        return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
    }

    if config.api.timeout_secs == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "api.timeout_secs must be greater than 0".to_string(),
        });
    }

    Ok(())
}

fn is_http_url(url: &str) -> bool {
    match reqwest::Url::parse(url) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https")
                && parsed.host_str().is_some_and(|host| !host.is_empty())
        }
        Err(_) => false,
    }
}
