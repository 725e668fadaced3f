//! Extraction and text-parsing error types
//!
//! Every failure carries the name of the extraction rule that produced it so
//! a markup change on the catalog site can be traced to a single rule.

use thiserror::Error;

use super::catalog_error::ErrorKind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsingError {
    #[error("Required element '{rule}' not found (selector '{selector}')")]
    RequiredElementMissing { rule: String, selector: String },

    #[error("Rule '{rule}' expects at least {required} elements, found {found}")]
    InsufficientElements {
        rule: String,
        selector: String,
        required: usize,
        found: usize,
    },

    #[error("Element '{rule}' has no '{attribute}' attribute")]
    AttributeMissing { rule: String, attribute: String },

    #[error("Label '{rule}' has no value separator in '{text}'")]
    LabelValueMissing { rule: String, text: String },

    #[error("URL resolution failed: {url} - {reason}")]
    UrlResolutionFailed {
        url: String,
        reason: String,
        base_url: Option<String>,
    },

    #[error("Invalid CSS selector for '{rule}': {selector} - {reason}")]
    InvalidSelector {
        rule: String,
        selector: String,
        reason: String,
    },

    #[error("Invalid duration '{input}': {reason}")]
    InvalidDuration { input: String, reason: String },
}

impl ParsingError {
    pub fn required_element_missing(rule: &str, selector: &str) -> Self {
        Self::RequiredElementMissing {
            rule: rule.to_string(),
            selector: selector.to_string(),
        }
    }

    pub fn insufficient_elements(rule: &str, selector: &str, required: usize, found: usize) -> Self {
        Self::InsufficientElements {
            rule: rule.to_string(),
            selector: selector.to_string(),
            required,
            found,
        }
    }

    pub fn attribute_missing(rule: &str, attribute: &str) -> Self {
        Self::AttributeMissing {
            rule: rule.to_string(),
            attribute: attribute.to_string(),
        }
    }

    pub fn invalid_duration(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidDuration {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// Classify this error within the catalog error taxonomy
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::RequiredElementMissing { .. }
            | Self::InsufficientElements { .. }
            | Self::AttributeMissing { .. }
            | Self::LabelValueMissing { .. }
            | Self::UrlResolutionFailed { .. } => ErrorKind::Extraction,
            Self::InvalidDuration { .. } => ErrorKind::Parse,
            Self::InvalidSelector { .. } => ErrorKind::Configuration,
        }
    }

    /// Name of the extraction rule involved, when there is one
    pub fn rule(&self) -> Option<&str> {
        match self {
            Self::RequiredElementMissing { rule, .. }
            | Self::InsufficientElements { rule, .. }
            | Self::AttributeMissing { rule, .. }
            | Self::LabelValueMissing { rule, .. }
            | Self::InvalidSelector { rule, .. } => Some(rule),
            Self::UrlResolutionFailed { .. } | Self::InvalidDuration { .. } => None,
        }
    }
}

pub type ParsingResult<T> = Result<T, ParsingError>;
