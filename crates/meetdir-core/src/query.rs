//! Query-string parsing for filter preselection.
//!
//! The directory URL may carry preselected filter values, e.g.
//! `?formats=foo,bar&types=speaker`. Keys map to comma-joined,
//! percent-encoded value lists. Unrecognized keys are preserved here and
//! ignored by downstream consumers.

use std::collections::BTreeMap;

/// Parses a raw query string into per-key value lists.
///
/// A leading `?` is accepted. Pairs without `=` and empty values are
/// dropped; values that fail to percent-decode are kept verbatim. Repeated
/// keys extend the earlier list.
pub fn parse_query(raw: &str) -> BTreeMap<String, Vec<String>> {
    let raw = raw.strip_prefix('?').unwrap_or(raw);
    let mut params: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for pair in raw.split('&').filter(|pair| !pair.is_empty()) {
        let Some((key, values)) = pair.split_once('=') else {
            continue;
        };
        if key.is_empty() {
            continue;
        }
        let decoded = values.split(',').filter(|value| !value.is_empty()).map(|value| {
            urlencoding::decode(value)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| value.to_string())
        });
        params.entry(key.to_string()).or_default().extend(decoded);
    }

    params
}
