//! Headless view models for the resource screens.
//!
//! [`ResourceList`] owns the collection and the editor dialog;
//! [`EditorModal`] holds one editable record and submits it.

pub mod dialog;
pub mod editor;
pub mod errors;
pub mod list;

pub use dialog::DialogState;
pub use editor::{EditorModal, EditorMode};
pub use errors::ViewError;
pub use list::{DeleteOutcome, ListChange, ListState, ResourceList, Row, RowAction};
