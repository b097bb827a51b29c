use crate::errors::PanelError;

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("Failed to save client state: {message}")]
    SaveFailed { message: String },

    #[error("Client state file corrupted: {message}")]
    LoadCorrupted { message: String },

    #[error("No project selected. Pass --project <GUID> or run 'hostpanel project use <GUID>'")]
    NoProjectSelected,
}

impl PanelError for StateError {
    fn error_code(&self) -> &'static str {
        match self {
            StateError::SaveFailed { .. } => "STATE_SAVE_FAILED",
            StateError::LoadCorrupted { .. } => "STATE_LOAD_CORRUPTED",
            StateError::NoProjectSelected => "STATE_NO_PROJECT_SELECTED",
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            StateError::NoProjectSelected => true,
            StateError::SaveFailed { .. } | StateError::LoadCorrupted { .. } => false,
        }
    }
}
