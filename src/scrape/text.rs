//! Whitespace normalization for scraped cell text.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Trims the input and collapses every run of whitespace characters,
/// including non-breaking spaces, into a single ASCII space.
///
/// Total over all inputs; an empty or all-whitespace string becomes `""`.
pub fn clean_text(raw: &str) -> String {
    WHITESPACE.replace_all(raw.trim(), " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(clean_text("  SBMX  "), "SBMX");
    }

    #[test]
    fn collapses_inner_runs() {
        assert_eq!(clean_text("Индекс   МосБиржи"), "Индекс МосБиржи");
        assert_eq!(clean_text("a \t\n b"), "a b");
    }

    #[test]
    fn handles_non_breaking_space() {
        assert_eq!(clean_text("1\u{a0}234"), "1 234");
        assert_eq!(clean_text("\u{a0}x\u{a0}"), "x");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("   \t  "), "");
    }
}
