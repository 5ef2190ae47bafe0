//! Meeting record types for the directory.
//!
//! This module provides the entities produced by the feed pipeline:
//! - [`Meeting`]: one directory-ready entry, post time-expansion
//! - [`ActionButton`]: a user-actionable contact channel
//! - [`ButtonAction`]: the capability the host environment dispatches on
//! - [`ButtonIcon`]: the icon shown on a button

use std::collections::BTreeSet;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::search::search_index;

/// The icon shown on an action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonIcon {
    /// A generic web link.
    Link,
    /// A recognized video conferencing service.
    Video,
    /// A telephone number.
    Phone,
    /// An email address.
    Email,
}

/// The capability a button delegates to the hosting environment.
///
/// The pipeline never embeds executable behavior in data. The host matches
/// on the variant and performs the corresponding OS or browser action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "target", rename_all = "snake_case")]
pub enum ButtonAction {
    /// Open the URL in a new browsing context.
    OpenUrl(String),
    /// Initiate a telephone call to the dial target.
    Dial(String),
    /// Open a mail composer addressed to the address.
    Compose(String),
}

impl ButtonAction {
    /// Returns the raw target string (URL, dial string, or address).
    pub fn target(&self) -> &str {
        match self {
            Self::OpenUrl(t) | Self::Dial(t) | Self::Compose(t) => t,
        }
    }
}

/// A user-actionable contact channel attached to a meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionButton {
    /// The icon to render.
    pub icon: ButtonIcon,
    /// Short display label (service name, hostname, number, or address).
    pub label: String,
    /// Hover/accessibility text embedding the original value.
    pub title: String,
    /// The capability to dispatch when the button is activated.
    pub action: ButtonAction,
}

/// One directory-ready meeting entry.
///
/// A feed row with N parseable recurring times expands into N records that
/// differ only in `time`; a row with none stays a single ongoing record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    /// Display name, trimmed.
    pub name: String,
    /// Free-form note lines (possibly empty).
    pub notes: Vec<String>,
    /// Contact buttons in url, phone, email order (0-3).
    pub buttons: Vec<ActionButton>,
    /// The row's own format and type tokens.
    pub tags: BTreeSet<String>,
    /// Normalized lowercase name tokens for substring search.
    pub search: String,
    /// Last-updated timestamp, passed through from the feed unmodified.
    pub updated: String,
    /// Next occurrence, carrying the declared timezone's offset.
    /// `None` means the meeting is ongoing.
    pub time: Option<DateTime<FixedOffset>>,
}

impl Meeting {
    /// Creates a meeting with the given display name.
    ///
    /// The name is trimmed and the search index derived from it.
    pub fn new(name: impl Into<String>) -> Self {
        let name: String = name.into();
        let name = name.trim().to_string();
        let search = search_index(&name);
        Self {
            name,
            notes: Vec::new(),
            buttons: Vec::new(),
            tags: BTreeSet::new(),
            search,
            updated: String::new(),
            time: None,
        }
    }

    /// Returns true if this meeting has no scheduled occurrence.
    pub fn is_ongoing(&self) -> bool {
        self.time.is_none()
    }

    /// Builder method to set the note lines.
    pub fn with_notes(mut self, notes: Vec<String>) -> Self {
        self.notes = notes;
        self
    }

    /// Builder method to set the contact buttons.
    pub fn with_buttons(mut self, buttons: Vec<ActionButton>) -> Self {
        self.buttons = buttons;
        self
    }

    /// Builder method to set the tags.
    pub fn with_tags(mut self, tags: BTreeSet<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Builder method to set the updated timestamp.
    pub fn with_updated(mut self, updated: impl Into<String>) -> Self {
        self.updated = updated.into();
        self
    }

    /// Builder method to set the occurrence time.
    pub fn with_time(mut self, time: DateTime<FixedOffset>) -> Self {
        self.time = Some(time);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn offset_time() -> DateTime<FixedOffset> {
        FixedOffset::west_opt(5 * 3600)
            .unwrap()
            .with_ymd_and_hms(2025, 6, 9, 19, 0, 0)
            .unwrap()
    }

    mod button_action {
        use super::*;

        #[test]
        fn target_extraction() {
            assert_eq!(
                ButtonAction::OpenUrl("https://example.com".to_string()).target(),
                "https://example.com"
            );
            assert_eq!(
                ButtonAction::Dial("5551234567,,9876".to_string()).target(),
                "5551234567,,9876"
            );
            assert_eq!(
                ButtonAction::Compose("a@b.com".to_string()).target(),
                "a@b.com"
            );
        }

        #[test]
        fn serde_tagged_form() {
            let action = ButtonAction::Dial("5551234567".to_string());
            let json = serde_json::to_string(&action).unwrap();
            assert_eq!(json, r#"{"kind":"dial","target":"5551234567"}"#);
            let parsed: ButtonAction = serde_json::from_str(&json).unwrap();
            assert_eq!(action, parsed);
        }
    }

    mod meeting {
        use super::*;

        #[test]
        fn new_trims_and_indexes_name() {
            let meeting = Meeting::new("  Morning  Serenity ");
            assert_eq!(meeting.name, "Morning  Serenity");
            assert_eq!(meeting.search, "morning serenity");
            assert!(meeting.is_ongoing());
            assert!(meeting.buttons.is_empty());
            assert!(meeting.tags.is_empty());
        }

        #[test]
        fn builder_pattern() {
            let meeting = Meeting::new("Evening Group")
                .with_notes(vec!["Open to all".to_string()])
                .with_updated("2025-06-01 12:00:00")
                .with_tags(["Online".to_string(), "Discussion".to_string()].into())
                .with_time(offset_time());

            assert_eq!(meeting.notes, vec!["Open to all".to_string()]);
            assert_eq!(meeting.updated, "2025-06-01 12:00:00");
            assert!(meeting.tags.contains("Online"));
            assert!(!meeting.is_ongoing());
        }

        #[test]
        fn time_preserves_offset() {
            let meeting = Meeting::new("Weekly").with_time(offset_time());
            let time = meeting.time.unwrap();
            assert_eq!(time.offset().local_minus_utc(), -5 * 3600);
        }

        #[test]
        fn serde_roundtrip() {
            let meeting = Meeting::new("Daily Reflections")
                .with_tags(["In-person".to_string()].into())
                .with_time(offset_time());
            let json = serde_json::to_string(&meeting).unwrap();
            let parsed: Meeting = serde_json::from_str(&json).unwrap();
            assert_eq!(meeting, parsed);
        }
    }
}
