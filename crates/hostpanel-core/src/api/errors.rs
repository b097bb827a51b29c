use crate::errors::PanelError;

/// Errors from the REST backend layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, bad body).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status code.
    #[error("HTTP error! status: {status}, message: {}", .message.as_deref().unwrap_or("<none>"))]
    Status {
        status: u16,
        /// The `message` field of the JSON error body, if there was one.
        message: Option<String>,
    },

    /// The configured base URL cannot carry request paths.
    #[error("Invalid API base URL '{url}'")]
    InvalidBaseUrl { url: String },

    /// A record without identifier cannot be addressed on the backend.
    #[error("Cannot address a {kind} without identifier")]
    MissingGuid { kind: &'static str },
}

impl PanelError for ApiError {
    fn error_code(&self) -> &'static str {
        match self {
            ApiError::Request(_) => "API_REQUEST_FAILED",
            ApiError::Status { .. } => "API_STATUS_ERROR",
            ApiError::InvalidBaseUrl { .. } => "API_INVALID_BASE_URL",
            ApiError::MissingGuid { .. } => "API_MISSING_GUID",
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            ApiError::Status { status, .. } => (400..500).contains(status),
            ApiError::InvalidBaseUrl { .. } | ApiError::MissingGuid { .. } => true,
            ApiError::Request(_) => false,
        }
    }
}
