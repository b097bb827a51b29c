use super::editor::{EditorModal, EditorMode};
use crate::resources::Resource;

/// Editor dialog state of a resource list.
///
/// Only one dialog can be open at a time.
#[derive(Clone, Debug)]
pub enum DialogState<R> {
    /// No dialog is open.
    None,
    /// Creation form is open.
    Create(EditorModal<R>),
    /// Edit form for an existing record is open.
    Edit(EditorModal<R>),
}

impl<R> Default for DialogState<R> {
    fn default() -> Self {
        DialogState::None
    }
}

impl<R: Resource> DialogState<R> {
    pub fn open(editor: EditorModal<R>) -> Self {
        match editor.mode() {
            EditorMode::Create => DialogState::Create(editor),
            EditorMode::Edit => DialogState::Edit(editor),
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, DialogState::None)
    }

    pub fn is_create(&self) -> bool {
        matches!(self, DialogState::Create(_))
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, DialogState::Edit(_))
    }

    pub fn editor(&self) -> Option<&EditorModal<R>> {
        match self {
            DialogState::None => None,
            DialogState::Create(editor) | DialogState::Edit(editor) => Some(editor),
        }
    }

    pub fn editor_mut(&mut self) -> Option<&mut EditorModal<R>> {
        match self {
            DialogState::None => None,
            DialogState::Create(editor) | DialogState::Edit(editor) => Some(editor),
        }
    }

    /// Error of the last failed submission, if a dialog is open.
    pub fn error(&self) -> Option<&str> {
        self.editor().and_then(|e| e.error())
    }
}
