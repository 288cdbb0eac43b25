//! Error types for the demo request form

use crate::state::FieldName;

/// Rejected field update.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("field '{field}' expects a {expected} value")]
    TypeMismatch {
        field: FieldName,
        expected: &'static str,
    },

    #[error("'{value}' is not an option for field '{field}'")]
    UnknownOption { field: FieldName, value: String },

    #[error("unknown field: {0}")]
    UnknownField(String),
}

/// Step navigation errors.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("step {index} is out of range (form has {total} steps)")]
    StepOutOfRange { index: usize, total: usize },
}

/// Failures talking to the submission endpoint.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("endpoint responded with status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Host mounting errors.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MountError {
    #[error("mount target \"{0}\" not found")]
    UnknownTarget(String),
}
