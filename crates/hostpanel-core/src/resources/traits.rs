//! Resource record trait definition.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::Debug;

use super::errors::ResourceError;
use super::types::ResourceKind;

/// Trait implemented by every record managed through the panel.
///
/// A record is flat: its editable form fields are addressed by name and
/// rendered as strings. The whole record is serialized on submission
/// (full overwrite, never a partial patch).
pub trait Resource: Debug + Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync {
    /// Which resource kind this record type represents.
    const KIND: ResourceKind;

    /// Globally unique identifier; empty for a record not yet created.
    fn guid(&self) -> &str;

    /// An empty record bound to the given project, used by the creation form.
    fn blank(project_guid: &str) -> Self;

    /// Current value of a form field rendered as a string.
    ///
    /// Returns `None` for names that are not form fields of this kind.
    fn field_value(&self, field: &str) -> Option<String>;

    /// Write a form field by name.
    ///
    /// # Errors
    ///
    /// `UnknownField` for names that are not form fields of this kind,
    /// `InvalidValue` when an enumerated field gets an unknown label.
    fn set_field(&mut self, field: &str, value: &str) -> Result<(), ResourceError>;

    /// All form field values in display order.
    fn field_values(&self) -> Vec<String> {
        Self::KIND
            .form_fields()
            .iter()
            .map(|spec| self.field_value(spec.name).unwrap_or_default())
            .collect()
    }

    /// Check that every form field is non-empty.
    ///
    /// # Errors
    ///
    /// `MissingField` naming the first empty field.
    fn validate(&self) -> Result<(), ResourceError> {
        for spec in Self::KIND.form_fields() {
            let value = self.field_value(spec.name).unwrap_or_default();
            if value.trim().is_empty() {
                return Err(ResourceError::MissingField { field: spec.name });
            }
        }
        Ok(())
    }
}

pub(crate) fn unknown_field(kind: ResourceKind, field: &str) -> ResourceError {
    ResourceError::UnknownField {
        kind,
        field: field.to_string(),
    }
}
