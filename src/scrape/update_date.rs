//! Discovery of the page-wide "last updated" date.

use once_cell::sync::Lazy;
use regex::Regex;

use super::date::format_date;

const UPDATE_LABEL: &str = "Последнее обновление:";

/// `<day> <monthname> <year>`, e.g. "5 марта 2024".
static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2})\s+(\p{L}+)\s+(\d{4})").expect("valid regex"));

/// Searches the page text for the update label and extracts the Russian
/// date phrase that follows it, formatted as `YYYY-MM-DD`.
///
/// Only the first occurrence of the label is considered and only the 100
/// characters after it are searched. Returns an empty string when the
/// label or a recognizable date is missing; both cases are logged.
pub fn locate_update_date(page_text: &str) -> String {
    let Some(idx) = page_text.find(UPDATE_LABEL) else {
        tracing::warn!("label '{}' not found on page", UPDATE_LABEL);
        return String::new();
    };

    let window: String = page_text[idx + UPDATE_LABEL.len()..]
        .chars()
        .take(100)
        .collect();
    let window = window.trim();

    match DATE_PATTERN.captures(window) {
        Some(caps) => {
            let (day, month, year) = (&caps[1], &caps[2], &caps[3]);
            let date = format_date(day, month, year);
            tracing::info!(
                "found update date: '{}' (source: {} {} {})",
                date,
                day,
                month,
                year
            );
            date
        }
        None => {
            let head: String = window.chars().take(50).collect();
            tracing::warn!("failed to parse update date; window: '{}'", head);
            String::new()
        }
    }
}
