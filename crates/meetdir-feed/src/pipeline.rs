//! Feed row to directory state transformation.
//!
//! One call to [`load_state`] turns a materialized feed into a complete
//! [`State`] snapshot: rows are extracted, contact channels classified,
//! tags aggregated, recurring times expanded, and filter vocabularies
//! merged with the caller's query-string preselection.
//!
//! The policy throughout is maximal salvage: malformed fields degrade
//! locally and are reported as [`Warning`]s; only a structurally broken row
//! is skipped, and nothing aborts the load. All accumulators are
//! call-scoped, so concurrent loads are fully independent.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::{debug, warn};

use meetdir_core::{
    ActionButton, Filters, Meeting, State, TagVocabulary, VideoService, email_button, fixed_tags,
    parse_query, phone_button, split_tokens, url_button,
};

use crate::config::DirectoryConfig;
use crate::error::{FieldKind, Warning};
use crate::raw_row::RawRow;
use crate::times;

/// The result of one load: the assembled state plus its diagnostics.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    /// The assembled directory snapshot.
    pub state: State,
    /// Advisory diagnostics collected along the way.
    pub warnings: Vec<Warning>,
}

/// Transforms a materialized feed into a directory [`State`].
///
/// * `feed` - the feed entries, one per row
/// * `query` - the raw query string carrying filter preselection
/// * `config` - day vocabulary, page size, and the video-service table
/// * `local_timezone` - the host's best-guess local zone
/// * `now` - reference instant for resolving recurring times
pub fn load_state(
    feed: &[Value],
    query: &str,
    config: &DirectoryConfig,
    local_timezone: &str,
    now: DateTime<Utc>,
) -> LoadOutcome {
    let preselected = parse_query(query);
    let mut formats = TagVocabulary::new();
    let mut types = TagVocabulary::new();
    let mut meetings = Vec::new();
    let mut warnings = Vec::new();

    for (index, entry) in feed.iter().enumerate() {
        let row = match RawRow::from_entry(entry) {
            Ok(row) => row,
            Err(err) => {
                warn!(row = index, %err, "skipping structurally broken row");
                continue;
            }
        };
        meetings.extend(expand_row(
            &row,
            index,
            config,
            &mut formats,
            &mut types,
            &mut warnings,
            now,
        ));
    }

    debug!(
        meetings = meetings.len(),
        warnings = warnings.len(),
        "feed transformed"
    );

    let filters = merge_filters(config, formats, types, &preselected);
    let state = State::new(filters, meetings, config.page_size, local_timezone);
    LoadOutcome { state, warnings }
}

/// Builds the meetings for one extracted row.
///
/// A row with N resolvable time expressions yields N records differing only
/// in `time`; a row with none yields a single ongoing record.
fn expand_row(
    row: &RawRow,
    index: usize,
    config: &DirectoryConfig,
    formats: &mut TagVocabulary,
    types: &mut TagVocabulary,
    warnings: &mut Vec<Warning>,
    now: DateTime<Utc>,
) -> Vec<Meeting> {
    formats.insert_list(&row.formats);
    types.insert_list(&row.types);

    let base = Meeting::new(&row.name)
        .with_notes(row.notes.lines().map(str::to_string).collect())
        .with_buttons(classify_buttons(row, index, &config.services, warnings))
        .with_tags(
            split_tokens(&row.formats)
                .chain(split_tokens(&row.types))
                .collect(),
        )
        .with_updated(&row.updated);

    let expansion = times::expand(&row.times, &row.timezone, now);
    if let Some(zone) = expansion.invalid_timezone {
        push_warning(warnings, index, zone, FieldKind::Timezone);
    }
    for expr in expansion.invalid {
        push_warning(warnings, index, expr, FieldKind::Time);
    }

    if expansion.occurrences.is_empty() {
        return vec![base];
    }
    expansion
        .occurrences
        .into_iter()
        .map(|instant| base.clone().with_time(instant))
        .collect()
}

/// Classifies the row's contact channels into action buttons.
///
/// Button order is fixed: url, phone, email. A malformed channel degrades
/// to a warning and no button.
fn classify_buttons(
    row: &RawRow,
    index: usize,
    services: &[VideoService],
    warnings: &mut Vec<Warning>,
) -> Vec<ActionButton> {
    let mut buttons = Vec::new();

    if !row.url.is_empty() {
        match url_button(&row.url, services) {
            Ok(button) => buttons.push(button),
            Err(_) => push_warning(warnings, index, row.url.clone(), FieldKind::Url),
        }
    }
    if !row.phone.is_empty() {
        match phone_button(&row.phone, &row.access_code) {
            Ok(button) => buttons.push(button),
            Err(_) => push_warning(warnings, index, row.phone.clone(), FieldKind::Phone),
        }
    }
    if !row.email.is_empty() {
        match email_button(&row.email) {
            Ok(button) => buttons.push(button),
            Err(_) => push_warning(warnings, index, row.email.clone(), FieldKind::Email),
        }
    }

    buttons
}

/// Merges the fixed and aggregated vocabularies with the preselection.
fn merge_filters(
    config: &DirectoryConfig,
    formats: TagVocabulary,
    types: TagVocabulary,
    preselected: &BTreeMap<String, Vec<String>>,
) -> Filters {
    Filters {
        days: fixed_tags(&config.days, selected(preselected, "days")),
        formats: formats.into_tags(selected(preselected, "formats")),
        types: types.into_tags(selected(preselected, "types")),
    }
}

/// Looks up one category's preselected values.
fn selected<'a>(preselected: &'a BTreeMap<String, Vec<String>>, category: &str) -> &'a [String] {
    preselected
        .get(category)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn push_warning(warnings: &mut Vec<Warning>, row: usize, value: String, kind: FieldKind) {
    let warning = Warning::new(row, value, kind);
    warn!("{warning}");
    warnings.push(warning);
}
