//! Compact year labels for timeline dates.

use regex::Regex;
use std::sync::LazyLock;

static YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(19|20)\d{2}\b").expect("year pattern is valid"));

/// Normalizes a free-text date range into a short year label.
///
/// - `"2022 - Present"` → `"2022-Present"` (first year only; the input is
///   returned unchanged when it has no year)
/// - two or more years → `"<first>-<last>"`
/// - one year → that year
/// - no year → the first whitespace-separated token
#[must_use]
pub fn get_year_range(date: &str) -> String {
    if date.to_lowercase().contains("present") {
        return YEAR
            .find(date)
            .map_or_else(|| date.to_string(), |year| format!("{}-Present", year.as_str()));
    }

    let years: Vec<&str> = YEAR.find_iter(date).map(|m| m.as_str()).collect();
    match years.as_slice() {
        [] => date.split_whitespace().next().unwrap_or_default().to_string(),
        [only] => (*only).to_string(),
        [first, .., last] => format!("{first}-{last}"),
    }
}
