//! Relative time formatting for card timestamps.

use chrono::{DateTime, Utc};

/// Formats how long ago `timestamp` was, relative to `now`.
///
/// Uses the largest whole unit up to days: seconds under a minute, minutes under an hour,
/// hours under a day, days beyond that. Units are singular when the count is 1. Counts are
/// floored, so a timestamp after `now` is not special-cased and yields a negative count
/// rounded away from zero.
///
/// # Example
/// ```ignore
/// let now = Utc::now();
/// assert_eq!(format_relative_time(now - Duration::seconds(90), now), "1 minute ago");
/// ```
pub fn format_relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(timestamp);

    let seconds = duration.num_milliseconds().div_euclid(1000);
    let minutes = seconds.div_euclid(60);
    let hours = minutes.div_euclid(60);
    let days = hours.div_euclid(24);

    if seconds < 60 {
        format!("{} second{} ago", seconds, plural(seconds))
    } else if minutes < 60 {
        format!("{} minute{} ago", minutes, plural(minutes))
    } else if hours < 24 {
        format!("{} hour{} ago", hours, plural(hours))
    } else {
        format!("{} day{} ago", days, plural(days))
    }
}

fn plural(count: i64) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
