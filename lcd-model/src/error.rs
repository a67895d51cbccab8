//! Error types for record construction, loading, and dumping.

use std::fmt::{self, Write};

use thiserror::Error;

use crate::value::Mapping;

/// Result type for lcd operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by `new`, `load`, and `dump`.
#[derive(Debug, Error)]
pub enum Error {
    /// Construction input did not satisfy the record's schema.
    #[error(transparent)]
    Invalid(#[from] InvalidRecord),

    /// The codec could not decode or encode the mapping.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// A `pre_dump` or `post_load` hook rejected its input.
    #[error("transform failed: {0}")]
    Transform(String),

    /// A `Record` impl declared a field it has no slot for.
    #[error("{record} declares field `{field}` but exposes no slot for it")]
    SlotMismatch { record: &'static str, field: String },
}

impl Error {
    pub fn transform(message: impl Into<String>) -> Self {
        Error::Transform(message.into())
    }

    /// The structured construction failure, if that is what this is.
    pub fn as_invalid(&self) -> Option<&InvalidRecord> {
        match self {
            Error::Invalid(invalid) => Some(invalid),
            _ => None,
        }
    }
}

/// Failures reported by codecs.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Custom(String),
}

/// A structured construction failure.
///
/// Both variants keep the full construction input so callers can inspect
/// exactly what was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidRecord {
    /// Input named fields the record does not declare.
    #[error("{record} got unexpected keys: [{}]", .keys.join(", "))]
    UnexpectedKeys {
        record: &'static str,
        keys: Vec<String>,
        input: Mapping,
    },

    /// One or more fields failed their validators. Every field is checked
    /// before this is raised.
    #[error("{record} failed validation:{}", render_field_errors(.errors))]
    FieldValidation {
        record: &'static str,
        errors: FieldErrors,
        input: Mapping,
    },
}

impl InvalidRecord {
    pub fn record(&self) -> &'static str {
        match self {
            InvalidRecord::UnexpectedKeys { record, .. }
            | InvalidRecord::FieldValidation { record, .. } => *record,
        }
    }

    pub fn input(&self) -> &Mapping {
        match self {
            InvalidRecord::UnexpectedKeys { input, .. }
            | InvalidRecord::FieldValidation { input, .. } => input,
        }
    }

    pub fn unexpected_keys(&self) -> Option<&[String]> {
        match self {
            InvalidRecord::UnexpectedKeys { keys, .. } => Some(keys),
            InvalidRecord::FieldValidation { .. } => None,
        }
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            InvalidRecord::FieldValidation { errors, .. } => Some(errors),
            InvalidRecord::UnexpectedKeys { .. } => None,
        }
    }

    /// Reasons reported for one failing field.
    pub fn reasons(&self, field: &str) -> Option<&[String]> {
        self.field_errors()
            .and_then(|errors| errors.get(field))
    }
}

/// Reasons per failing field, in the record's declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    entries: Vec<(String, Vec<String>)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `reasons` for `field`. A repeated field keeps its position
    /// and takes the new reasons.
    pub fn insert(&mut self, field: impl Into<String>, reasons: Vec<String>) {
        let field = field.into();
        match self.entries.iter_mut().find(|(name, _)| *name == field) {
            Some(entry) => entry.1 = reasons,
            None => self.entries.push((field, reasons)),
        }
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, reasons)| reasons.as_slice())
    }

    pub fn contains_key(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, reasons)| (name.as_str(), reasons.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_field_errors(self))
    }
}

fn render_field_errors(errors: &FieldErrors) -> String {
    let mut out = String::new();
    for (field, reasons) in errors.iter() {
        if reasons.is_empty() {
            let _ = write!(out, "\n  {field}: invalid");
        }
        for reason in reasons {
            let _ = write!(out, "\n  {field}: {reason}");
        }
    }
    out
}
