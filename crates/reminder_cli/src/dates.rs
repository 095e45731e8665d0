//! Date tokens accepted by the `add` command.
//!
//! Dates are written `dd.mm.yy`; `today` and `tomorrow` are resolved
//! against the day the caller passes in.

use chrono::{Days, NaiveDate};

const DATE_FORMAT: &str = "%d.%m.%y";

/// Parses one date token relative to `today`.
///
/// Returns `None` for anything that is neither a keyword nor a valid
/// `dd.mm.yy` date.
pub fn parse_date_token(token: &str, today: NaiveDate) -> Option<NaiveDate> {
    match token.trim().to_ascii_lowercase().as_str() {
        "today" => Some(today),
        "tomorrow" => today.checked_add_days(Days::new(1)),
        other => NaiveDate::parse_from_str(other, DATE_FORMAT).ok(),
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
