//! Raw row type extracted from the external feed.
//!
//! A [`RawRow`] holds the trimmed per-column text of one feed entry before
//! transformation. Rows are usually extracted from the feed's JSON structure
//! with [`RawRow::from_entry`]; builder methods exist for tests and
//! alternate transports.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RowError;

/// One feed entry's raw column values, trimmed.
///
/// Every column is required to exist in the feed; empty text is fine and
/// simply means the row does not use that channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    /// Meeting display name.
    pub name: String,
    /// Newline-separated note lines.
    pub notes: String,
    /// Meeting URL, possibly a video-service link.
    pub url: String,
    /// Dial-in phone number.
    pub phone: String,
    /// Conference access code appended when dialing.
    pub access_code: String,
    /// Contact email address.
    pub email: String,
    /// Comma-separated format tokens.
    pub formats: String,
    /// Comma-separated type tokens.
    pub types: String,
    /// IANA timezone identifier for the row's times.
    pub timezone: String,
    /// Newline-separated recurring time expressions.
    pub times: String,
    /// Last-updated timestamp, passed through unmodified.
    pub updated: String,
}

impl RawRow {
    /// Creates a row with the given name and all other columns empty.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Extracts a row from one feed entry.
    ///
    /// Each named column is either a nested object whose `"$t"` member
    /// holds the cell text, or a plain string. A missing column or non-text
    /// value fails the whole row; the caller skips it and moves on.
    pub fn from_entry(entry: &Value) -> Result<Self, RowError> {
        Ok(Self {
            name: field(entry, "name")?,
            notes: field(entry, "notes")?,
            url: field(entry, "url")?,
            phone: field(entry, "phone")?,
            access_code: field(entry, "access-code")?,
            email: field(entry, "email")?,
            formats: field(entry, "formats")?,
            types: field(entry, "types")?,
            timezone: field(entry, "timezone")?,
            times: field(entry, "times")?,
            updated: field(entry, "updated")?,
        })
    }

    /// Builder method to set the notes column.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Builder method to set the url column.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Builder method to set the phone column.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Builder method to set the access-code column.
    pub fn with_access_code(mut self, access_code: impl Into<String>) -> Self {
        self.access_code = access_code.into();
        self
    }

    /// Builder method to set the email column.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Builder method to set the formats column.
    pub fn with_formats(mut self, formats: impl Into<String>) -> Self {
        self.formats = formats.into();
        self
    }

    /// Builder method to set the types column.
    pub fn with_types(mut self, types: impl Into<String>) -> Self {
        self.types = types.into();
        self
    }

    /// Builder method to set the timezone column.
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    /// Builder method to set the times column.
    pub fn with_times(mut self, times: impl Into<String>) -> Self {
        self.times = times.into();
        self
    }

    /// Builder method to set the updated column.
    pub fn with_updated(mut self, updated: impl Into<String>) -> Self {
        self.updated = updated.into();
        self
    }
}

/// Reads one named column as trimmed text.
fn field(entry: &Value, name: &'static str) -> Result<String, RowError> {
    let cell = entry
        .get(name)
        .ok_or(RowError::MissingField { field: name })?;
    let text = match cell {
        Value::String(text) => text.as_str(),
        nested => nested
            .get("$t")
            .and_then(Value::as_str)
            .ok_or(RowError::MissingField { field: name })?,
    };
    Ok(text.trim().to_string())
}
