//! Error and diagnostic types for the feed pipeline.
//!
//! Two severities exist. [`RowError`] is fatal for a single row: the row is
//! skipped and the run continues. [`Warning`] records a malformed field that
//! degraded locally (a button or occurrence was omitted). Nothing in the
//! pipeline aborts a whole load.

use std::fmt;

use thiserror::Error;

/// Fatal-for-the-row extraction failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RowError {
    /// A required feed column is absent or not text.
    #[error("missing required field \"{field}\"")]
    MissingField {
        /// The feed column name.
        field: &'static str,
    },
}

/// The kind of field a warning refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Url,
    Phone,
    Email,
    Time,
    Timezone,
}

impl FieldKind {
    /// Human-readable name used in diagnostic lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Url => "URL",
            Self::Phone => "phone number",
            Self::Email => "email address",
            Self::Time => "time",
            Self::Timezone => "timezone",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Feed maintainers see rows 1-indexed, below a header row.
const DISPLAY_ROW_OFFSET: usize = 2;

/// An advisory diagnostic for one malformed field.
///
/// Warnings never abort processing. They are collected per load so the
/// caller may batch-log or ignore them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// Internal 0-based row index.
    pub row: usize,
    /// The offending raw value.
    pub value: String,
    /// What the value failed to parse as.
    pub kind: FieldKind,
}

impl Warning {
    /// Creates a warning for one malformed field.
    pub fn new(row: usize, value: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            row,
            value: value.into(),
            kind,
        }
    }

    /// The row number as displayed to feed maintainers.
    pub fn display_row(&self) -> usize {
        self.row + DISPLAY_ROW_OFFSET
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Row {}: \"{}\" is not a valid {}.",
            self.display_row(),
            self.value,
            self.kind
        )
    }
}
