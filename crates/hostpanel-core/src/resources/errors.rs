use crate::errors::PanelError;

use super::types::ResourceKind;

/// Errors raised while editing or validating a resource record.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResourceError {
    #[error("Unknown field '{field}' for {kind}")]
    UnknownField { kind: ResourceKind, field: String },

    #[error("Invalid value '{value}' for {field}. Expected one of: {}", .expected.join(", "))]
    InvalidValue {
        field: &'static str,
        value: String,
        expected: &'static [&'static str],
    },

    #[error("Field '{field}' is required")]
    MissingField { field: &'static str },
}

impl PanelError for ResourceError {
    fn error_code(&self) -> &'static str {
        match self {
            ResourceError::UnknownField { .. } => "RESOURCE_UNKNOWN_FIELD",
            ResourceError::InvalidValue { .. } => "RESOURCE_INVALID_VALUE",
            ResourceError::MissingField { .. } => "RESOURCE_MISSING_FIELD",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}
