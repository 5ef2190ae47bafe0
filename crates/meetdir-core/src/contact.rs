//! Contact-channel classification for meeting rows.
//!
//! This module turns raw url/phone/email strings into typed
//! [`ActionButton`]s:
//! - URLs are parsed and checked against a configurable video-service table
//! - Phone numbers are reduced to digits and validated by length
//! - Email addresses are validated against a standard address grammar
//!
//! Malformed input is an error the caller converts into a per-row warning;
//! nothing here panics or rejects a row.
//!
//! # Example
//!
//! ```
//! use meetdir_core::contact::{url_button, VideoService};
//! use meetdir_core::meeting::ButtonIcon;
//!
//! let services = [VideoService::new("Zoom", &["zoom.us"])];
//! let button = url_button("https://us04web.zoom.us/j/123", &services).unwrap();
//! assert_eq!(button.icon, ButtonIcon::Video);
//! assert_eq!(button.label, "Zoom");
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::meeting::{ActionButton, ButtonAction, ButtonIcon};

/// Regex for validating email addresses.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("Invalid email regex")
});

/// Dialable numbers need more digits than a local exchange.
const MAX_INVALID_PHONE_DIGITS: usize = 8;

/// A malformed contact channel value.
///
/// Each variant carries the offending raw value so callers can report it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContactError {
    /// The value could not be parsed as a URL, or has no hostname.
    #[error("\"{0}\" is not a valid URL")]
    InvalidUrl(String),
    /// The value has too few digits to dial.
    #[error("\"{0}\" is not a valid phone number")]
    InvalidPhone(String),
    /// The value does not match the address grammar.
    #[error("\"{0}\" is not a valid email address")]
    InvalidEmail(String),
}

/// A video conferencing service recognized by hostname suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoService {
    /// Human-readable service name, used as the button label.
    pub name: String,
    /// Hostname suffixes that identify the service.
    pub domains: Vec<String>,
}

impl VideoService {
    /// Creates a service entry from a name and its domain suffixes.
    pub fn new(name: impl Into<String>, domains: &[&str]) -> Self {
        Self {
            name: name.into(),
            domains: domains.iter().map(|d| d.to_string()).collect(),
        }
    }

    /// Returns true if the hostname belongs to this service.
    ///
    /// Suffix matching, so subdomains ("us04web.zoom.us") are recognized.
    fn matches(&self, host: &str) -> bool {
        self.domains.iter().any(|domain| host.ends_with(domain.as_str()))
    }
}

/// Classifies a non-empty URL into a link or video button.
///
/// The hostname is checked against `services`; the first match wins and
/// yields a video button labeled with the service name. Unrecognized hosts
/// yield a plain link button labeled with the hostname (leading "www."
/// stripped). The original URL is preserved as the action target.
pub fn url_button(raw: &str, services: &[VideoService]) -> Result<ActionButton, ContactError> {
    let parsed = Url::parse(raw).map_err(|_| ContactError::InvalidUrl(raw.to_string()))?;
    let host = parsed
        .host_str()
        .ok_or_else(|| ContactError::InvalidUrl(raw.to_string()))?;

    let (icon, label) = match services.iter().find(|service| service.matches(host)) {
        Some(service) => (ButtonIcon::Video, service.name.clone()),
        None => (
            ButtonIcon::Link,
            host.strip_prefix("www.").unwrap_or(host).to_string(),
        ),
    };

    Ok(ActionButton {
        icon,
        label,
        title: format!("Open {raw} in a new tab"),
        action: ButtonAction::OpenUrl(raw.to_string()),
    })
}

/// Classifies a non-empty phone number into a dial button.
///
/// All non-digit characters are stripped; eight or fewer remaining digits is
/// an error. An access code, when present, is appended with a two-comma DTMF
/// pause so dialers enter it as an extension.
pub fn phone_button(raw: &str, access_code: &str) -> Result<ActionButton, ContactError> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() <= MAX_INVALID_PHONE_DIGITS {
        return Err(ContactError::InvalidPhone(raw.to_string()));
    }

    let target = if access_code.is_empty() {
        digits
    } else {
        format!("{digits},,{access_code}")
    };

    Ok(ActionButton {
        icon: ButtonIcon::Phone,
        label: raw.to_string(),
        title: format!("Call {raw}"),
        action: ButtonAction::Dial(target),
    })
}

/// Classifies a non-empty email address into a compose button.
pub fn email_button(raw: &str) -> Result<ActionButton, ContactError> {
    if !EMAIL_REGEX.is_match(raw) {
        return Err(ContactError::InvalidEmail(raw.to_string()));
    }

    Ok(ActionButton {
        icon: ButtonIcon::Email,
        label: raw.to_string(),
        title: format!("Email {raw}"),
        action: ButtonAction::Compose(raw.to_string()),
    })
}
