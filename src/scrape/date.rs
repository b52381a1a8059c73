//! Russian date phrase conversion.

/// Maps a genitive-case Russian month name to its zero-padded number.
///
/// Matching is case-insensitive. Anything unrecognized maps to `"00"`
/// instead of failing, so a garbled month never aborts the run.
pub fn month_number(name: &str) -> &'static str {
    match name.to_lowercase().as_str() {
        "января" => "01",
        "февраля" => "02",
        "марта" => "03",
        "апреля" => "04",
        "мая" => "05",
        "июня" => "06",
        "июля" => "07",
        "августа" => "08",
        "сентября" => "09",
        "октября" => "10",
        "ноября" => "11",
        "декабря" => "12",
        _ => "00",
    }
}

/// Formats a Russian "day monthname year" triple as `YYYY-MM-DD`.
///
/// A single-digit day is zero-padded. No calendar validation is done; a
/// day of "32" passes through verbatim.
pub fn format_date(day: &str, month: &str, year: &str) -> String {
    let month_num = month_number(month);
    if day.len() == 1 {
        format!("{}-{}-0{}", year, month_num, day)
    } else {
        format!("{}-{}-{}", year, month_num, day)
    }
}
