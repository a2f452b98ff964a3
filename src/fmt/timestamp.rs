//! Wall-clock segment rendering.

use chrono::Local;

/// ISO-8601 without zone information; compact enough to lead every line.
pub const BASE_PATTERN: &str = "%Y-%m-%dT%H:%M:%S";

/// Same instant plus the local UTC offset (`+02:00` style), for logs that are
/// read across time zones.
pub const OFFSET_PATTERN: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// The offset toggle selects between two fixed patterns; there is no free-form
/// format surface to validate.
#[must_use]
pub const fn pattern(include_utc_offset: bool) -> &'static str {
    if include_utc_offset {
        OFFSET_PATTERN
    } else {
        BASE_PATTERN
    }
}

/// Formats the current local time. Each call reads the clock; lines logged in
/// the same second render identically.
#[must_use]
pub fn now(include_utc_offset: bool) -> String {
    Local::now().format(pattern(include_utc_offset)).to_string()
}
