//! Text formatting helpers shared by the card and list extractors.

use chrono::NaiveDate;

use crate::patterns::ISO_DATE;

/// Shorten `text` to at most `max_len` characters plus `"..."`.
///
/// The cut backs up to the last space when that space lies past the
/// halfway point, so words are not split when avoidable.
///
/// # Examples
///
/// ```
/// use page_tree::metadata::truncate;
///
/// assert_eq!(truncate("short", 10), "short");
/// assert_eq!(truncate("one two three four", 12), "one two...");
/// ```
#[must_use]
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }

    let cut: String = text.chars().take(max_len).collect();
    let half = max_len / 2;
    let shortened = match cut.rfind(' ') {
        Some(pos) if cut[..pos].chars().count() > half => &cut[..pos],
        _ => cut.as_str(),
    };
    format!("{}...", shortened.trim_end())
}

/// Render an ISO datetime as `"Mon D, YYYY"`.
///
/// Only the first ten characters (`YYYY-MM-DD`) are parsed; anything that
/// is not an ISO date is returned unchanged.
///
/// # Examples
///
/// ```
/// use page_tree::metadata::format_date;
///
/// assert_eq!(format_date("2024-03-05T10:00:00Z"), "Mar 5, 2024");
/// assert_eq!(format_date("yesterday"), "yesterday");
/// ```
#[must_use]
pub fn format_date(datetime: &str) -> String {
    let trimmed = datetime.trim();
    let prefix: String = trimmed.chars().take(10).collect();
    if !ISO_DATE.is_match(&prefix) {
        return datetime.to_string();
    }
    NaiveDate::parse_from_str(&prefix, "%Y-%m-%d")
        .map_or_else(|_| datetime.to_string(), |date| date.format("%b %-d, %Y").to_string())
}
