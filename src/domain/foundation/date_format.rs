//! Display formatting for dates and times printed on documents.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use super::LanguagePreference;

const WELSH_MONTHS: [&str; 12] = [
    "Ionawr",
    "Chwefror",
    "Mawrth",
    "Ebrill",
    "Mai",
    "Mehefin",
    "Gorffennaf",
    "Awst",
    "Medi",
    "Hydref",
    "Tachwedd",
    "Rhagfyr",
];

/// Formats a date as `1 January 2023`, or `1 Ionawr 2023` in Welsh.
pub fn format_date(date: NaiveDate, language: LanguagePreference) -> String {
    match language {
        LanguagePreference::English => date.format("%-d %B %Y").to_string(),
        LanguagePreference::Welsh => format!(
            "{} {} {}",
            date.day(),
            WELSH_MONTHS[date.month0() as usize],
            date.year()
        ),
    }
}

/// Formats an optional date, passing `None` through.
pub fn format_optional_date(
    date: Option<NaiveDate>,
    language: LanguagePreference,
) -> Option<String> {
    date.map(|d| format_date(d, language))
}

/// Formats the time component as a 24 hour clock, e.g. `10:30`.
pub fn format_time(date_time: NaiveDateTime) -> String {
    date_time.format("%H:%M").to_string()
}
