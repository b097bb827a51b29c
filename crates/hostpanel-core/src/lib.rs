//! hostpanel-core: Core library for the hosting administration panel
//!
//! Typed records for databases, storages and web spaces, a REST client for
//! the hosting backend, and headless view models for the list and editor
//! screens. It is used by the `hostpanel` CLI.
//!
//! # Main Entry Points
//!
//! - [`view`] - Resource list and editor modal view models
//! - [`api`] - REST client
//! - [`resources`] - Record types and form field metadata
//! - [`notify`] - Confirmation prompts and toast notifications
//! - [`config`] - Configuration management
//! - [`state`] - Persisted current project

pub mod api;
pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod notify;
pub mod resources;
pub mod state;
pub mod view;

// Re-export commonly used types at crate root for convenience
pub use api::{ApiError, PanelApi};
pub use config::PanelConfig;
pub use errors::{ConfigError, PanelError};
pub use notify::{
    ConfirmPrompt, Confirmer, Locale, Messages, Notifier, StaticConfirmer, Toast, ToastKind,
};
pub use resources::{
    Database, FieldSpec, HostType, Language, Project, Resource, ResourceError, ResourceKind,
    Storage, WebSpace,
};
pub use state::{ClientState, StateError};
pub use view::{
    DeleteOutcome, DialogState, EditorModal, EditorMode, ListChange, ListState, ResourceList,
    ViewError,
};

// Re-export logging initialization
pub use logging::init_logging;
