use crate::api::ApiError;
use crate::errors::PanelError;
use crate::resources::ResourceError;

/// Errors surfaced by the list and editor view models.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error(transparent)]
    Resource(#[from] ResourceError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Records have not been loaded")]
    NotLoaded,

    #[error("No record with id '{guid}' in this list")]
    RecordNotFound { guid: String },

    #[error("No editor dialog is open")]
    NoDialogOpen,

    #[error("Unexpected response status {status}")]
    UnexpectedStatus { status: u16 },
}

impl PanelError for ViewError {
    fn error_code(&self) -> &'static str {
        match self {
            ViewError::Resource(e) => e.error_code(),
            ViewError::Api(e) => e.error_code(),
            ViewError::NotLoaded => "VIEW_NOT_LOADED",
            ViewError::RecordNotFound { .. } => "VIEW_RECORD_NOT_FOUND",
            ViewError::NoDialogOpen => "VIEW_NO_DIALOG_OPEN",
            ViewError::UnexpectedStatus { .. } => "VIEW_UNEXPECTED_STATUS",
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            ViewError::Resource(e) => e.is_user_error(),
            ViewError::Api(e) => e.is_user_error(),
            ViewError::RecordNotFound { .. } => true,
            ViewError::NotLoaded
            | ViewError::NoDialogOpen
            | ViewError::UnexpectedStatus { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_errors_keep_codes() {
        let error: ViewError = ResourceError::MissingField { field: "url" }.into();
        assert_eq!(error.error_code(), "RESOURCE_MISSING_FIELD");
        assert_eq!(error.to_string(), "Field 'url' is required");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_record_not_found() {
        let error = ViewError::RecordNotFound {
            guid: "zz".to_string(),
        };
        assert_eq!(error.to_string(), "No record with id 'zz' in this list");
        assert!(error.is_user_error());
    }
}
