//! Catalog client error taxonomy
//!
//! `CatalogError` is what the client and the resolver service return. Markup
//! failures arrive wrapped from [`ParsingError`]; `kind()` flattens both into
//! one [`ErrorKind`] so callers can map them onto protocol-level errors.

use thiserror::Error;

use super::parsing_error::ParsingError;

/// Error classes surfaced to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Non-200 HTTP status
    Fetch,
    /// Search envelope status flag was not the success token
    Source,
    /// Search envelope carried no results payload
    EmptyResult,
    /// Expected markup element absent
    Extraction,
    /// Duration or numeric text malformed
    Parse,
    /// Connection or body read failure below HTTP status handling
    Transport,
    /// Search response body was not the expected JSON envelope
    Envelope,
    /// Query rejected before any request was made
    InvalidQuery,
    /// Bad base URL or selector configuration
    Configuration,
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("HTTP request failed: {status} - {url}")]
    Fetch { status: u16, url: String },

    #[error("Catalog search failed with status '{status}'")]
    Source { status: String },

    #[error("Catalog search returned no results")]
    EmptyResult,

    #[error(transparent)]
    Parsing(#[from] ParsingError),

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed search response: {0}")]
    Envelope(#[from] serde_json::Error),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Configuration error in '{field}': {message}")]
    Configuration { message: String, field: String },
}

impl CatalogError {
    pub fn configuration(field: &str, message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            field: field.to_string(),
        }
    }

    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Fetch { .. } => ErrorKind::Fetch,
            Self::Source { .. } => ErrorKind::Source,
            Self::EmptyResult => ErrorKind::EmptyResult,
            Self::Parsing(e) => e.kind(),
            Self::Transport(_) => ErrorKind::Transport,
            Self::Envelope(_) => ErrorKind::Envelope,
            Self::InvalidQuery(_) => ErrorKind::InvalidQuery,
            Self::Configuration { .. } => ErrorKind::Configuration,
        }
    }

    /// HTTP status for fetch failures
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Fetch { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsing_errors_keep_their_kind() {
        let err: CatalogError = ParsingError::invalid_duration("a:b:c", "non-numeric component").into();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert_eq!(err.to_string(), "Invalid duration 'a:b:c': non-numeric component");
    }

    #[test]
    fn test_fetch_error_exposes_status() {
        let err = CatalogError::Fetch {
            status: 503,
            url: "https://librivox.org/x/".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Fetch);
        assert_eq!(err.status(), Some(503));
        assert_eq!(CatalogError::EmptyResult.status(), None);
    }
}
