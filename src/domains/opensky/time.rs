//! Unix timestamp formatting. All output is UTC.

use chrono::{DateTime, Utc};

/// `2023-11-14 22:13:20 UTC`
pub const DATE_TIME_SECONDS: &str = "%Y-%m-%d %H:%M:%S UTC";

/// `2023-11-14 22:13 UTC`
pub const DATE_TIME_MINUTES: &str = "%Y-%m-%d %H:%M UTC";

/// `22:13 UTC`
pub const TIME_MINUTES: &str = "%H:%M UTC";

/// Format Unix seconds with one of the patterns above.
///
/// Timestamps outside chrono's representable range are rendered raw.
pub fn format_unix(seconds: i64, pattern: &str) -> String {
    match DateTime::<Utc>::from_timestamp(seconds, 0) {
        Some(dt) => dt.format(pattern).to_string(),
        None => format!("{} (unix)", seconds),
    }
}
