//! Numeric cell parsing.
//!
//! The source table mixes Russian number formatting (comma decimal
//! separator, space or apostrophe thousands grouping), unit decorations
//! (`%`, `₽`, `*`) and several "no data" markers. Everything that cannot
//! be read as a number degrades to `None` so a bad cell never fails a row.

use once_cell::sync::Lazy;
use regex::Regex;

use super::text::clean_text;

static NON_NUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\d.\-]").expect("valid regex"));

/// Dash markers the source uses for "value intentionally absent".
const NO_DATA_SENTINELS: [&str; 3] = ["—", "*—*", "—*"];

/// Parses a free-form table cell into a number.
///
/// Returns `None` for empty cells, dash sentinels and cells decorated with
/// an info glyph. Formatting characters are stripped, a comma decimal
/// separator becomes a period, and when several periods survive the first
/// one is kept as the decimal point. A cell that still fails to parse is
/// logged and degrades to `None`.
pub fn parse_number(raw: &str) -> Option<f64> {
    let text = clean_text(raw);

    if text.is_empty()
        || NO_DATA_SENTINELS.contains(&text.as_str())
        || text.contains('⸗')
        || text.contains('ℹ')
    {
        return None;
    }

    let original = text.clone();

    let stripped: String = text
        .chars()
        .filter(|c| !matches!(c, '*' | '\'' | '’' | ' ' | '\u{a0}' | '%' | '₽'))
        .collect();
    let stripped = stripped.replace(',', ".");
    let mut cleaned = NON_NUMERIC.replace_all(&stripped, "").into_owned();

    // Several periods means ambiguous grouping; the first one wins as the
    // decimal point and the rest are dropped.
    if cleaned.matches('.').count() > 1 {
        let mut parts = cleaned.split('.');
        let head = parts.next().unwrap_or("");
        cleaned = format!("{}.{}", head, parts.collect::<String>());
    }

    let cleaned = cleaned.trim();
    if cleaned.is_empty() || cleaned == "." || cleaned == "-" {
        return None;
    }

    match cleaned.parse::<f64>() {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(
                "failed to parse number: '{}' -> '{}': {}",
                original,
                cleaned,
                err
            );
            None
        }
    }
}
