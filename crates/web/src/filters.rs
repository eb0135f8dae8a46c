//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use chrono::{DateTime, Utc};

/// Display format for timestamps, e.g. "26 Aug 2026 at 14:30".
const DATE_FORMAT: &str = "%d %b %Y at %H:%M";

/// Format a timestamp for display.
///
/// Usage in templates: `{{ card_set.created|date }}`
#[askama::filter_fn]
pub fn date(value: &DateTime<Utc>, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format_date(value))
}

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(Utc::now().year())
}

fn format_date(value: &DateTime<Utc>) -> String {
    value.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_date_format() {
        let ts = Utc.with_ymd_and_hms(2026, 8, 26, 14, 30, 0).unwrap();
        assert_eq!(format_date(&ts), "26 Aug 2026 at 14:30");
    }
}
