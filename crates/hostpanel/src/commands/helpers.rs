use clap::ArgMatches;
use tracing::{info, warn};

use hostpanel_core::PanelConfig;
use hostpanel_core::api::PanelApi;
use hostpanel_core::config::{API_URL_ENV, loading};
use hostpanel_core::notify::{ConsoleNotifier, DesktopNotifier, Messages, MultiNotifier};

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
///
/// The `HOSTPANEL_API_URL` override still applies to the fallback.
pub fn load_config_with_warning() -> PanelConfig {
    match PanelConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.hostpanel/config.toml and ./.hostpanel/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            loading::apply_env_overrides(PanelConfig::default(), std::env::var(API_URL_ENV).ok())
        }
    }
}

/// Everything a command needs to talk to the backend and to the user.
pub struct Session {
    pub api: PanelApi,
    pub messages: Messages,
    pub notifier: MultiNotifier,
}

impl Session {
    /// Resolve config (with `--api-url` applied on top) and build the client.
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = load_config_with_warning();

        if let Some(url) = matches.get_one::<String>("api-url") {
            config.api.base_url = Some(url.clone());
            config.validate()?;
        }

        let api = PanelApi::from_config(&config)?;
        let messages = Messages::new(config.locale());

        let mut notifier = MultiNotifier::new().with(ConsoleNotifier::new());
        if config.desktop_notifications() {
            notifier = notifier.with(DesktopNotifier::new());
        }

        info!(
            event = "cli.session_ready",
            base_url = api.base_url(),
            desktop_notify = config.desktop_notifications()
        );

        Ok(Self {
            api,
            messages,
            notifier,
        })
    }
}

/// The `--project` flag, if given.
pub fn project_flag(matches: &ArgMatches) -> Option<&str> {
    matches.get_one::<String>("project").map(String::as_str)
}
