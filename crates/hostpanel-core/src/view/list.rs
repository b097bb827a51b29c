//! Resource list view model.
//!
//! Owns the in-memory collection for one project. The collection is only
//! changed through [`ResourceList::apply`] after a backend call completes;
//! it is never re-fetched to reflect local edits.

use reqwest::StatusCode;
use tracing::{debug, error, info, warn};

use super::dialog::DialogState;
use super::editor::{EditorModal, EditorMode};
use super::errors::ViewError;
use crate::api::PanelApi;
use crate::notify::{Confirmer, Messages, Notifier};
use crate::resources::{Project, Resource};

/// Loading state of the list.
#[derive(Debug, Clone, PartialEq)]
pub enum ListState<R> {
    Loading,
    Ready { project: Project, records: Vec<R> },
    LoadFailed { message: String },
}

/// A local mutation produced by a completed backend call.
#[derive(Debug, Clone, PartialEq)]
pub enum ListChange<R> {
    /// Append a newly created record.
    Added(R),
    /// Replace the record with the same guid.
    Updated(R),
    /// Remove the record with this guid.
    Deleted(String),
}

/// Per-row actions offered by the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Delete,
}

impl RowAction {
    pub const ALL: &'static [RowAction] = &[RowAction::Edit, RowAction::Delete];

    pub fn label(&self) -> &'static str {
        match self {
            RowAction::Edit => "Edit",
            RowAction::Delete => "Delete",
        }
    }
}

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub guid: String,
    /// One cell per form field, in display order.
    pub cells: Vec<String>,
    pub actions: &'static [RowAction],
}

/// Result of a delete request that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined; nothing was sent.
    Cancelled,
    Deleted,
}

#[derive(Debug, Clone)]
pub struct ResourceList<R> {
    project_guid: String,
    state: ListState<R>,
    dialog: DialogState<R>,
}

impl<R: Resource> ResourceList<R> {
    pub fn new(project_guid: impl Into<String>) -> Self {
        Self {
            project_guid: project_guid.into(),
            state: ListState::Loading,
            dialog: DialogState::default(),
        }
    }

    pub fn project_guid(&self) -> &str {
        &self.project_guid
    }

    pub fn state(&self) -> &ListState<R> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ListState::Loading)
    }

    /// The resolved project, once loaded.
    pub fn project(&self) -> Option<&Project> {
        match &self.state {
            ListState::Ready { project, .. } => Some(project),
            _ => None,
        }
    }

    /// Records in server order; empty until loaded.
    pub fn records(&self) -> &[R] {
        match &self.state {
            ListState::Ready { records, .. } => records,
            _ => &[],
        }
    }

    /// Fetch the project, then the records scoped to it.
    ///
    /// The second request is only sent once the first has succeeded. On
    /// failure the list is left in [`ListState::LoadFailed`].
    pub async fn load(&mut self, api: &PanelApi) -> Result<(), ViewError> {
        self.state = ListState::Loading;
        info!(
            event = "core.view.load_started",
            kind = R::KIND.label(),
            project = %self.project_guid
        );

        let loaded = async {
            let project = api.get_project(&self.project_guid).await?;
            let records = api.list_by_project::<R>(&project.guid).await?;
            Ok::<_, ViewError>((project, records))
        }
        .await;

        match loaded {
            Ok((project, records)) => {
                info!(
                    event = "core.view.load_completed",
                    kind = R::KIND.label(),
                    project = %project.guid,
                    count = records.len()
                );
                self.state = ListState::Ready { project, records };
                Ok(())
            }
            Err(e) => {
                error!(
                    event = "core.view.load_failed",
                    kind = R::KIND.label(),
                    project = %self.project_guid,
                    error = %e
                );
                self.state = ListState::LoadFailed {
                    message: e.to_string(),
                };
                Err(e)
            }
        }
    }

    /// Apply a local change. Returns `false` if nothing matched or the list
    /// is not loaded.
    pub fn apply(&mut self, change: ListChange<R>) -> bool {
        let ListState::Ready { records, .. } = &mut self.state else {
            warn!(
                event = "core.view.change_ignored",
                kind = R::KIND.label(),
                reason = "not loaded"
            );
            return false;
        };

        match change {
            ListChange::Added(record) => {
                records.push(record);
                true
            }
            ListChange::Updated(record) => {
                match records.iter_mut().find(|r| r.guid() == record.guid()) {
                    Some(slot) => {
                        *slot = record;
                        true
                    }
                    None => {
                        debug!(
                            event = "core.view.update_unmatched",
                            kind = R::KIND.label(),
                            guid = record.guid()
                        );
                        false
                    }
                }
            }
            ListChange::Deleted(guid) => {
                let before = records.len();
                records.retain(|r| r.guid() != guid);
                records.len() != before
            }
        }
    }

    /// Table rows with one cell per form field plus the row actions.
    pub fn rows(&self) -> Vec<Row> {
        self.records()
            .iter()
            .map(|record| Row {
                guid: record.guid().to_string(),
                cells: record.field_values(),
                actions: RowAction::ALL,
            })
            .collect()
    }

    /// Column headers matching [`Row::cells`], followed by "Actions".
    pub fn headers(&self) -> Vec<&'static str> {
        R::KIND
            .form_fields()
            .iter()
            .map(|f| f.label)
            .chain(std::iter::once("Actions"))
            .collect()
    }

    fn find(&self, guid: &str) -> Result<&R, ViewError> {
        if !matches!(self.state, ListState::Ready { .. }) {
            return Err(ViewError::NotLoaded);
        }
        self.records()
            .iter()
            .find(|r| r.guid() == guid)
            .ok_or_else(|| ViewError::RecordNotFound {
                guid: guid.to_string(),
            })
    }

    /// Delete one record after explicit confirmation.
    ///
    /// Declining sends nothing. Only a `200 OK` answer removes the row;
    /// any other outcome shows an error toast and leaves the list as is.
    pub async fn delete(
        &mut self,
        api: &PanelApi,
        confirmer: &dyn Confirmer,
        notifier: &dyn Notifier,
        messages: &Messages,
        guid: &str,
    ) -> Result<DeleteOutcome, ViewError> {
        let kind = R::KIND;
        self.find(guid)?;

        if !confirmer.confirm(&messages.confirm_delete()) {
            info!(
                event = "core.view.delete_cancelled",
                kind = kind.label(),
                guid = guid
            );
            return Ok(DeleteOutcome::Cancelled);
        }

        info!(
            event = "core.view.delete_started",
            kind = kind.label(),
            guid = guid
        );

        let failure = match api.delete::<R>(guid).await {
            Ok(status) if status == StatusCode::OK => {
                self.apply(ListChange::Deleted(guid.to_string()));
                notifier.notify(&messages.deleted(kind));
                info!(
                    event = "core.view.delete_completed",
                    kind = kind.label(),
                    guid = guid
                );
                return Ok(DeleteOutcome::Deleted);
            }
            Ok(status) => ViewError::UnexpectedStatus {
                status: status.as_u16(),
            },
            Err(e) => ViewError::Api(e),
        };

        error!(
            event = "core.view.delete_failed",
            kind = kind.label(),
            guid = guid,
            error = %failure
        );
        notifier.notify(&messages.delete_failed(kind));
        Err(failure)
    }

    pub fn dialog(&self) -> &DialogState<R> {
        &self.dialog
    }

    /// Open the creation form for this list's project.
    pub fn open_create(&mut self) {
        self.dialog = DialogState::open(EditorModal::open_create(&self.project_guid));
    }

    /// Open the edit form for the record with `guid`.
    pub fn open_edit(&mut self, guid: &str) -> Result<(), ViewError> {
        let editor = EditorModal::open_edit(self.find(guid)?);
        self.dialog = DialogState::open(editor);
        Ok(())
    }

    /// Write one field of the open form.
    pub fn set_field(&mut self, field: &str, value: &str) -> Result<(), ViewError> {
        self.dialog
            .editor_mut()
            .ok_or(ViewError::NoDialogOpen)?
            .set_field(field, value)
    }

    /// Submit the open form and merge the saved record into the list.
    ///
    /// The dialog closes on success and stays open (with its error
    /// recorded) on failure.
    pub async fn submit_dialog(
        &mut self,
        api: &PanelApi,
        notifier: &dyn Notifier,
        messages: &Messages,
    ) -> Result<R, ViewError> {
        let editor = self.dialog.editor_mut().ok_or(ViewError::NoDialogOpen)?;
        let mode = editor.mode();
        let saved = editor.submit(api, notifier, messages).await?;

        self.dialog = DialogState::None;
        let change = match mode {
            EditorMode::Create => ListChange::Added(saved.clone()),
            EditorMode::Edit => ListChange::Updated(saved.clone()),
        };
        self.apply(change);
        Ok(saved)
    }
}
