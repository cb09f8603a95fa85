//! Error handling for the document clustering front end
//!
//! Failures never leave the panel that caused them. The variants below carry
//! diagnostic detail for the console; [`ClientError::user_message`] gives the
//! static text a panel shows to the user.

use std::fmt;

/// Text shown by the upload panel after any failed upload
pub const UPLOAD_FAILURE_MESSAGE: &str = "Failed to process documents. Please try again.";

/// Text shown by the search panel after any failed search
pub const SEARCH_FAILURE_MESSAGE: &str = "Failed to perform search. Please try again.";

const UNEXPECTED_FAILURE_MESSAGE: &str = "Something went wrong. Please reload the page.";

/// Main error type for the front end
#[derive(Debug)]
pub enum ClientError {
    /// Transport, status or decode failure on the document processing endpoint
    Upload {
        /// Diagnostic detail
        message: String,
    },

    /// Transport, status or decode failure on the search endpoint
    Search {
        /// Diagnostic detail
        message: String,
    },

    /// Invalid page-supplied configuration
    Config {
        /// Error message
        message: String,
    },

    /// JSON (de)serialization errors not yet attributed to a panel
    Decode(serde_json::Error),
}

impl ClientError {
    pub fn upload(message: impl Into<String>) -> Self {
        ClientError::Upload {
            message: message.into(),
        }
    }

    pub fn search(message: impl Into<String>) -> Self {
        ClientError::Search {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        ClientError::Config {
            message: message.into(),
        }
    }

    /// Static, user-facing text for this failure kind
    pub fn user_message(&self) -> &'static str {
        match self {
            ClientError::Upload { .. } => UPLOAD_FAILURE_MESSAGE,
            ClientError::Search { .. } => SEARCH_FAILURE_MESSAGE,
            ClientError::Config { .. } | ClientError::Decode(_) => UNEXPECTED_FAILURE_MESSAGE,
        }
    }

    /// Re-attribute this error to the upload panel
    pub fn into_upload(self) -> Self {
        match self {
            ClientError::Upload { .. } => self,
            other => ClientError::upload(other.to_string()),
        }
    }

    /// Re-attribute this error to the search panel
    pub fn into_search(self) -> Self {
        match self {
            ClientError::Search { .. } => self,
            other => ClientError::search(other.to_string()),
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Upload { message } => write!(f, "Document upload failed: {message}"),
            ClientError::Search { message } => write!(f, "Search failed: {message}"),
            ClientError::Config { message } => write!(f, "Configuration error: {message}"),
            ClientError::Decode(err) => write!(f, "JSON decode error: {err}"),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Decode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err)
    }
}

/// Result alias used across the front end
pub type Result<T> = std::result::Result<T, ClientError>;
