//! Editor modal: a local, editable copy of one record.
//!
//! The editor never touches the list it was opened from. A successful
//! submission returns the saved record; applying it is the caller's job.

use tracing::{error, info, warn};

use super::errors::ViewError;
use crate::api::PanelApi;
use crate::notify::{Messages, Notifier};
use crate::resources::Resource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    /// Submits with `POST /{collection}`.
    Create,
    /// Submits with `PUT /{collection}/{guid}`.
    Edit,
}

#[derive(Debug, Clone)]
pub struct EditorModal<R> {
    mode: EditorMode,
    form: R,
    error: Option<String>,
}

impl<R: Resource> EditorModal<R> {
    /// Open pre-populated with every field of `record`.
    pub fn open_edit(record: &R) -> Self {
        Self {
            mode: EditorMode::Edit,
            form: record.clone(),
            error: None,
        }
    }

    /// Open with an empty record bound to `project_guid`.
    pub fn open_create(project_guid: &str) -> Self {
        Self {
            mode: EditorMode::Create,
            form: R::blank(project_guid),
            error: None,
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Current local form state.
    pub fn form(&self) -> &R {
        &self.form
    }

    /// Message of the last failed submission.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Write one form field by name.
    pub fn set_field(&mut self, field: &str, value: &str) -> Result<(), ViewError> {
        self.form.set_field(field, value)?;
        Ok(())
    }

    /// Validate and send the whole form.
    ///
    /// On success a success toast is shown and the saved record (the parsed
    /// response body) is returned. On failure an error toast is shown, the
    /// error is recorded on the modal and the form is left as it was so it
    /// can be resubmitted.
    pub async fn submit(
        &mut self,
        api: &PanelApi,
        notifier: &dyn Notifier,
        messages: &Messages,
    ) -> Result<R, ViewError> {
        let kind = R::KIND;

        if let Err(e) = self.form.validate() {
            warn!(
                event = "core.view.submit_rejected",
                kind = kind.label(),
                error = %e
            );
            self.error = Some(e.to_string());
            notifier.notify(&messages.invalid_form(e.to_string()));
            return Err(e.into());
        }

        info!(
            event = "core.view.submit_started",
            kind = kind.label(),
            mode = ?self.mode,
            guid = self.form.guid()
        );

        let result = match self.mode {
            EditorMode::Create => api.create(&self.form).await,
            EditorMode::Edit => api.update(&self.form).await,
        };

        match result {
            Ok(saved) => {
                info!(
                    event = "core.view.submit_completed",
                    kind = kind.label(),
                    guid = saved.guid()
                );
                self.error = None;
                let toast = match self.mode {
                    EditorMode::Create => messages.created(kind),
                    EditorMode::Edit => messages.updated(kind),
                };
                notifier.notify(&toast);
                Ok(saved)
            }
            Err(e) => {
                error!(
                    event = "core.view.submit_failed",
                    kind = kind.label(),
                    error = %e
                );
                self.error = Some(e.to_string());
                let toast = match self.mode {
                    EditorMode::Create => messages.create_failed(kind),
                    EditorMode::Edit => messages.update_failed(kind),
                };
                notifier.notify(&toast);
                Err(e.into())
            }
        }
    }
}
