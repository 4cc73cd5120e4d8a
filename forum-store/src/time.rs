/// Display-time normalization
///
/// Stored timestamps are UTC-ish values in `YYYY-MM-DD HH:MM:SS` form.
/// The frontend shows them shifted by a fixed +8 hours; that shift happens
/// here, at render time, never at write time.

use chrono::{Duration, NaiveDateTime};
use tracing::warn;

/// Fixed display offset applied to stored timestamps, in hours
pub const DISPLAY_OFFSET_HOURS: i64 = 8;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Shifts a stored `YYYY-MM-DD HH:MM:SS` timestamp by the display offset
///
/// Empty input passes through unchanged. Unparseable input is logged and
/// returned unchanged; this function never fails.
pub fn to_display_time(raw: &str) -> String {
    if raw.is_empty() {
        return raw.to_string();
    }

    match NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT) {
        Ok(ts) => (ts + Duration::hours(DISPLAY_OFFSET_HOURS))
            .format(TIMESTAMP_FORMAT)
            .to_string(),
        Err(e) => {
            warn!(value = raw, error = %e, "could not convert stored timestamp for display");
            raw.to_string()
        }
    }
}
