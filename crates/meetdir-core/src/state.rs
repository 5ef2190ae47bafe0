//! Assembled application state snapshot.

use serde::{Deserialize, Serialize};

use crate::meeting::Meeting;
use crate::tags::Filters;

/// One immutable directory snapshot, the pipeline's sole output.
///
/// A new load fully replaces the previous state. Filter and search changes
/// derive new views outside the pipeline; nothing mutates a produced state
/// in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    /// Filter vocabularies with preselection applied.
    pub filters: Filters,
    /// Page size for the meeting list.
    pub limit: usize,
    /// Always false once a load completes.
    pub loading: bool,
    /// Directory entries, post time-expansion.
    pub meetings: Vec<Meeting>,
    /// Active search terms; populated later by user interaction.
    pub search: Vec<String>,
    /// Best-guess local timezone supplied by the host.
    pub timezone: String,
}

impl State {
    /// Creates a completed snapshot with no active search.
    pub fn new(
        filters: Filters,
        meetings: Vec<Meeting>,
        limit: usize,
        timezone: impl Into<String>,
    ) -> Self {
        Self {
            filters,
            limit,
            loading: false,
            meetings,
            search: Vec::new(),
            timezone: timezone.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_marks_load_complete() {
        let state = State::new(Filters::default(), Vec::new(), 10, "America/New_York");
        assert!(!state.loading);
        assert!(state.search.is_empty());
        assert_eq!(state.limit, 10);
        assert_eq!(state.timezone, "America/New_York");
    }

    #[test]
    fn serde_roundtrip() {
        let state = State::new(
            Filters::default(),
            vec![Meeting::new("Morning Group")],
            25,
            "UTC",
        );
        let json = serde_json::to_string(&state).unwrap();
        let parsed: State = serde_json::from_str(&json).unwrap();
        assert_eq!(state, parsed);
    }
}
