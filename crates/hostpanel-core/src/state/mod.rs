//! Persisted client state (the currently selected project).
//!
//! Nothing in the view layer reads this implicitly: callers resolve the
//! project here and pass its guid down.

pub mod errors;
pub mod persistence;
pub mod types;

pub use errors::StateError;
pub use persistence::{
    clear_current_project, load_state, resolve_project, save_state, set_current_project,
    state_file_path,
};
pub use types::ClientState;
