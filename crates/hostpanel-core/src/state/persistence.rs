use std::path::PathBuf;

use super::errors::StateError;
use super::types::ClientState;

/// Environment variable overriding the state file location.
pub const STATE_FILE_ENV: &str = "HOSTPANEL_STATE_FILE";

/// Load client state from ~/.hostpanel/state.json.
///
/// Returns default empty state if the file doesn't exist. A file that exists
/// but cannot be read or parsed yields default state with `load_error` set.
pub fn load_state() -> ClientState {
    let path = state_file_path();
    if !path.exists() {
        return ClientState::default();
    }

    match std::fs::read_to_string(&path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(state) => state,
            Err(e) => {
                tracing::error!(
                    event = "core.state.json_parse_failed",
                    path = %path.display(),
                    error = %e,
                    "State file exists but contains invalid JSON"
                );
                ClientState {
                    load_error: Some(format!(
                        "State file corrupted ({}). Delete {} to reset.",
                        e,
                        path.display()
                    )),
                    ..Default::default()
                }
            }
        },
        Err(e) => {
            tracing::error!(
                event = "core.state.load_failed",
                path = %path.display(),
                error = %e
            );
            ClientState {
                load_error: Some(format!(
                    "Failed to read state file: {}. Check permissions on {}",
                    e,
                    path.display()
                )),
                ..Default::default()
            }
        }
    }
}

/// Save client state to ~/.hostpanel/state.json.
pub fn save_state(state: &ClientState) -> Result<(), StateError> {
    let path = state_file_path();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| StateError::SaveFailed {
            message: format!("Failed to create directory ({}): {}", parent.display(), e),
        })?;
    }

    let json = serde_json::to_string_pretty(state).map_err(|e| StateError::SaveFailed {
        message: format!("Failed to serialize state: {}", e),
    })?;

    std::fs::write(&path, json).map_err(|e| StateError::SaveFailed {
        message: format!("Failed to write state file ({}): {}", path.display(), e),
    })?;

    tracing::info!(
        event = "core.state.saved",
        path = %path.display(),
        current_project = ?state.current_project
    );

    Ok(())
}

/// Remember `guid` as the current project.
///
/// A corrupted state file is overwritten.
pub fn set_current_project(guid: &str) -> Result<(), StateError> {
    let mut state = load_state();
    state.current_project = Some(guid.to_string());
    save_state(&state)
}

/// Forget the current project. Returns the guid that was selected, if any.
pub fn clear_current_project() -> Result<Option<String>, StateError> {
    let mut state = load_state();
    let previous = state.current_project.take();
    if previous.is_some() {
        save_state(&state)?;
    }
    Ok(previous)
}

/// Resolve the project to operate on.
///
/// A non-empty `explicit` guid wins; otherwise the persisted selection is
/// used.
///
/// # Errors
///
/// `LoadCorrupted` if the state file cannot be read, `NoProjectSelected`
/// if there is neither an explicit nor a persisted project.
pub fn resolve_project(explicit: Option<&str>) -> Result<String, StateError> {
    if let Some(guid) = explicit.map(str::trim).filter(|g| !g.is_empty()) {
        return Ok(guid.to_string());
    }

    let state = load_state();
    if let Some(message) = state.load_error {
        return Err(StateError::LoadCorrupted { message });
    }
    state
        .current_project
        .filter(|g| !g.is_empty())
        .ok_or(StateError::NoProjectSelected)
}

pub fn state_file_path() -> PathBuf {
    // Allow override via env var for testing.
    if let Ok(path_str) = std::env::var(STATE_FILE_ENV)
        && !path_str.is_empty()
    {
        return PathBuf::from(path_str);
    }

    match dirs::home_dir() {
        Some(home) => home.join(".hostpanel").join("state.json"),
        None => {
            tracing::error!(
                event = "core.state.home_dir_not_found",
                fallback = ".",
                "Could not determine home directory - using current directory as fallback"
            );
            PathBuf::from(".").join(".hostpanel").join("state.json")
        }
    }
}

/// Test utilities for state persistence.
///
/// Public so the CLI crate can use the env lock/guard in its tests.
#[doc(hidden)]
pub mod test_helpers {
    use std::sync::Mutex;

    use super::STATE_FILE_ENV;

    /// Mutex to serialize tests that modify HOSTPANEL_STATE_FILE.
    pub static STATE_FILE_ENV_LOCK: Mutex<()> = Mutex::new(());

    /// RAII guard that removes HOSTPANEL_STATE_FILE on drop.
    pub struct StateFileEnvGuard;

    impl StateFileEnvGuard {
        pub fn new(path: &std::path::Path) -> Self {
            // SAFETY: Caller must hold STATE_FILE_ENV_LOCK to serialize access
            // from Rust test code. Other threads or C code could still read the
            // environment; acceptable in test-only code.
            unsafe { std::env::set_var(STATE_FILE_ENV, path) };
            Self
        }
    }

    impl Drop for StateFileEnvGuard {
        fn drop(&mut self) {
            // SAFETY: Caller must hold STATE_FILE_ENV_LOCK throughout guard
            // lifetime. See safety comment in new().
            unsafe { std::env::remove_var(STATE_FILE_ENV) };
        }
    }
}
