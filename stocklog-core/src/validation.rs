use crate::models::Operation;
use time::{Date, Month, format_description};

/// The default pattern a request's business date must match: two-digit day,
/// two-digit month, four-digit year, separated by slashes.
pub const DEFAULT_DATE_FORMAT: &str = "[day]/[month]/[year]";

/// The default limit on the cumulative purchased amount per product per
/// calendar month.
pub const DEFAULT_MONTHLY_CAP: i64 = 30;

/// Parse a business date, strictly.
///
/// The input must match the format pattern exactly: no partial matches, no
/// trailing characters, no lenient separators. Returns `None` on any
/// mismatch, logging the reason.
pub fn parse_date(input: &str, format: &str) -> Option<Date> {
    let items = match format_description::parse(format) {
        Ok(items) => items,
        Err(error) => {
            tracing::error!(?error, format, "date format pattern does not parse");
            return None;
        }
    };

    match Date::parse(input, &items) {
        Ok(date) => Some(date),
        Err(_) => {
            tracing::error!(input, format, "invalid date");
            None
        }
    }
}

/// True only if `input` strictly matches the date format pattern.
pub fn validate_date_format(input: &str, format: &str) -> bool {
    parse_date(input, format).is_some()
}

/// True iff `op` is exactly `in` or `out`.
///
/// No case normalization happens here; a caller that wants to accept mixed
/// case must lower-case before asking.
pub fn is_operation_allowed(op: &str) -> bool {
    op.parse::<Operation>().is_ok()
}

/// The half-open calendar-month window containing `date`.
///
/// The bounds are the first day of the month and the first day of the next
/// month, so a timestamp `t` belongs to the window when `start <= t < end`.
pub fn month_window(date: Date) -> (Date, Date) {
    let start = date.replace_day(1).expect("every month has a day 1");

    let next = start.month().next();
    let year = if next == Month::January {
        start.year() + 1
    } else {
        start.year()
    };
    let end = Date::from_calendar_date(year, next, 1).expect("every month has a day 1");

    (start, end)
}

/// True if a purchase of `amount` keeps the month's cumulative purchased
/// total within `cap`.
///
/// `prior_total` is the sum of already-recorded purchases in the month; the
/// check is inclusive, so a purchase landing exactly on the cap passes.
pub fn within_monthly_cap(prior_total: i64, amount: i64, cap: i64) -> bool {
    prior_total.saturating_add(amount) <= cap
}
