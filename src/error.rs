//! The crate-level error type.
//!
//! One typed enum covers the three failure families the harness produces:
//! transport failures from the HTTP client, decode failures when a body is
//! not the JSON it claims to be, and the structural assertion mismatches the
//! checks raise — each carrying the field, expected, and actual detail that
//! names exactly what diverged.

use serde_json::Value;
use thiserror::Error;

/// Anything that can go wrong while probing an API.
#[derive(Debug, Error)]
pub enum Error {
    /// The underlying HTTP request failed (connect, timeout, body read).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A body could not be decoded as the expected JSON.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured base URL is not a valid URL.
    #[error("invalid base url: {0}")]
    InvalidUrl(String),

    /// A default header name or value is not valid.
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// The response status did not match the expected status.
    #[error("expected status {expected}, got {actual}")]
    StatusMismatch { expected: u16, actual: u16 },

    /// A required response header was absent.
    #[error("missing header `{0}`")]
    MissingHeader(String),

    /// A response header was present but its value diverged.
    #[error("header `{header}`: expected to contain `{expected}`, got `{actual}`")]
    HeaderMismatch {
        header: String,
        expected: String,
        actual: String,
    },

    /// The body was expected to be a JSON array but was something else.
    #[error("expected a JSON array, got {actual}")]
    NotAnArray { actual: &'static str },

    /// The body was expected to be a JSON object but was something else.
    #[error("expected a JSON object, got {actual}")]
    NotAnObject { actual: &'static str },

    /// An array that was required to be non-empty was empty.
    #[error("expected a non-empty array, got an empty one")]
    EmptyArray,

    /// A required field was absent from the record.
    #[error("missing field `{field}`")]
    MissingField { field: String },

    /// An `id` was present but not a positive integer.
    #[error("expected a positive id, got {actual}")]
    NonPositiveId { actual: i64 },

    /// A field was present but of the wrong JSON type.
    #[error("field `{field}`: expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// A field required to be non-null was null.
    #[error("field `{field}` was null")]
    NullField { field: String },

    /// A field's value did not equal the expected value.
    #[error("field `{field}`: expected {expected}, got {actual}")]
    ValueMismatch {
        field: String,
        expected: Value,
        actual: Value,
    },

    /// The requested suite group is not one of the known groups.
    #[error("unknown group: {0}")]
    UnknownGroup(String),
}
