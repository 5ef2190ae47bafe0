//! Tag vocabularies and filter state.
//!
//! Feed rows carry comma-separated "format" and "type" lists. Tokens are
//! accumulated per load into a [`TagVocabulary`] and surfaced as sorted,
//! deduplicated [`Tag`] lists inside [`Filters`], with preselected entries
//! marked checked.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One selectable filter entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// The tag value.
    pub tag: String,
    /// Whether the tag was preselected at load time.
    pub checked: bool,
}

/// Splits a comma-separated tag list into trimmed, non-empty tokens.
pub fn split_tokens(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

/// Call-scoped accumulator for one filter vocabulary.
///
/// Backed by a `BTreeSet`, so the produced vocabulary is deduplicated and
/// sorted by ordinal string comparison regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagVocabulary {
    values: BTreeSet<String>,
}

impl TagVocabulary {
    /// Creates an empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts every token from a comma-separated list.
    pub fn insert_list(&mut self, raw: &str) {
        self.values.extend(split_tokens(raw));
    }

    /// Returns the number of distinct tags accumulated so far.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no tags have been accumulated.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Produces the sorted vocabulary, marking entries present in
    /// `preselected` as checked.
    pub fn into_tags(self, preselected: &[String]) -> Vec<Tag> {
        self.values
            .into_iter()
            .map(|tag| Tag {
                checked: preselected.contains(&tag),
                tag,
            })
            .collect()
    }
}

/// Builds a fixed-order vocabulary (e.g. weekday names) with preselection.
///
/// Unlike [`TagVocabulary::into_tags`], the given order is preserved.
pub fn fixed_tags(values: &[String], preselected: &[String]) -> Vec<Tag> {
    values
        .iter()
        .map(|value| Tag {
            tag: value.clone(),
            checked: preselected.contains(value),
        })
        .collect()
}

/// Filter vocabularies by category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filters {
    /// Fixed day-name vocabulary, in configured order.
    pub days: Vec<Tag>,
    /// Aggregated meeting formats, sorted ascending.
    pub formats: Vec<Tag>,
    /// Aggregated meeting types, sorted ascending.
    pub types: Vec<Tag>,
}

impl Filters {
    /// Returns the vocabulary for a category name, if recognized.
    pub fn get(&self, category: &str) -> Option<&[Tag]> {
        match category {
            "days" => Some(&self.days),
            "formats" => Some(&self.formats),
            "types" => Some(&self.types),
            _ => None,
        }
    }
}
