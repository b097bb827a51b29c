use serde::{Deserialize, Serialize};

/// Client-side state persisted between runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientState {
    /// Project whose resources the panel shows by default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_project: Option<String>,

    /// Error message if loading failed (file corrupted, unreadable, etc.).
    /// Transient, never serialized.
    #[serde(skip)]
    pub load_error: Option<String>,
}
