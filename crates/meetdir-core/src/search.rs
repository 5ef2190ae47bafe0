//! Search-index derivation for meeting names.

/// Normalizes a meeting name into a lowercase token string.
///
/// Lowercases, splits on whitespace, drops empty tokens, and rejoins with
/// single spaces. Pure and idempotent: applying it to its own output is a
/// no-op.
pub fn search_index(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_collapses_whitespace() {
        assert_eq!(search_index("  Big Book\tStudy  "), "big book study");
    }

    #[test]
    fn handles_empty_input() {
        assert_eq!(search_index(""), "");
        assert_eq!(search_index("   \t  "), "");
    }

    #[test]
    fn idempotent_under_relowercasing() {
        let index = search_index("Sunday Night  SPEAKER Meeting");
        assert_eq!(index, index.to_lowercase());
        assert_eq!(search_index(&index), index);
    }

    #[test]
    fn no_leading_trailing_or_double_spaces() {
        let index = search_index(" One   Two  Three ");
        assert!(!index.starts_with(' '));
        assert!(!index.ends_with(' '));
        assert!(!index.contains("  "));
    }
}
