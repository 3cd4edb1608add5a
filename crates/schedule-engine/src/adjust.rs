//! Calendar-aware arithmetic over instants.
//!
//! Day-level operations work in local time so they follow the calendar:
//! adding a day across a DST transition lands on the same wall-clock time,
//! not 86,400 seconds later. Hour-level operations are fixed-width UTC
//! arithmetic. Elapsed-unit counts (`days_between`, `hours_between`) are
//! ceiling-rounded and direction-sensitive.

use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;

use crate::instant::Instant;
use crate::local::resolve_local;

const QUARTER_HOUR_SECS: i64 = 900;

/// Elapsed days from `a` to `b`, ceiling-rounded.
///
/// Direction follows `b - a`: the result is negative when `b` is before
/// `a`, and the sign is the caller's to interpret. Units are fixed 24-hour
/// days, not calendar days.
///
/// # Examples
///
/// ```
/// use schedule_engine::{days_between, Instant};
///
/// let jan1 = Instant::parse_iso("2025-01-01T00:00:00Z").unwrap();
/// let jan10 = Instant::parse_iso("2025-01-10T00:00:00Z").unwrap();
/// assert_eq!(days_between(jan1, jan10), 9);
/// assert_eq!(days_between(jan10, jan1), -9);
/// ```
pub fn days_between(a: Instant, b: Instant) -> i64 {
    ceil_div(elapsed_millis(a, b), 86_400_000)
}

/// Elapsed hours from `a` to `b`, ceiling-rounded, direction-sensitive.
pub fn hours_between(a: Instant, b: Instant) -> i64 {
    ceil_div(elapsed_millis(a, b), 3_600_000)
}

/// The instant at `00:00:00.000` of the same local calendar day.
///
/// Total: a zone whose day starts inside a DST gap resolves to the first
/// valid wall-clock of that day.
pub fn start_of_day(instant: Instant, tz: Tz) -> Instant {
    let local = instant.as_datetime().with_timezone(&tz);
    local
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .and_then(|naive| resolve_local(&tz, naive))
        .map(|dt| Instant::from(dt.with_timezone(&Utc)))
        .unwrap_or(instant)
}

/// The instant at `23:59:59.999` of the same local calendar day.
pub fn end_of_day(instant: Instant, tz: Tz) -> Instant {
    let local = instant.as_datetime().with_timezone(&tz);
    local
        .date_naive()
        .and_hms_milli_opt(23, 59, 59, 999)
        .and_then(|naive| resolve_local(&tz, naive))
        .map(|dt| Instant::from(dt.with_timezone(&Utc)))
        .unwrap_or(instant)
}

/// Add `days` local calendar days, preserving the wall-clock time.
///
/// Crossing a month boundary follows the calendar, and crossing a DST
/// transition keeps the same local time rather than shifting by a fixed
/// 86,400 seconds. `days` may be negative.
pub fn add_days(instant: Instant, days: i64, tz: Tz) -> Instant {
    let local = instant.as_datetime().with_timezone(&tz);
    let date = local.date_naive() + Duration::days(days);
    let naive = date.and_time(local.time());
    resolve_local(&tz, naive)
        .map(|dt| Instant::from(dt.with_timezone(&Utc)))
        .unwrap_or(instant)
}

/// Add `hours` fixed 3600-second hours. `hours` may be negative.
pub fn add_hours(instant: Instant, hours: i64) -> Instant {
    Instant::from(instant.as_datetime() + Duration::hours(hours))
}

/// `from + minutes`, rounded to the nearest quarter-hour boundary with
/// seconds and sub-seconds zeroed.
///
/// Used to propose a sensible default end time when a user is filling in a
/// new schedule; not used for any invariant-bearing computation. Ties round
/// up.
pub fn plus_minutes_rounded(from: Instant, minutes: i64) -> Instant {
    let target = from.as_datetime() + Duration::minutes(minutes);
    let rounded = (target.timestamp() + QUARTER_HOUR_SECS / 2).div_euclid(QUARTER_HOUR_SECS)
        * QUARTER_HOUR_SECS;
    DateTime::from_timestamp(rounded, 0)
        .map(Instant::from)
        .unwrap_or_else(|| Instant::from(target))
}

/// [`plus_minutes_rounded`] anchored at the ambient clock.
pub fn now_plus_minutes_rounded(minutes: i64) -> Instant {
    plus_minutes_rounded(Instant::now(), minutes)
}

fn elapsed_millis(a: Instant, b: Instant) -> i64 {
    b.as_datetime()
        .signed_duration_since(a.as_datetime())
        .num_milliseconds()
}

/// Ceiling division for a positive divisor.
fn ceil_div(num: i64, den: i64) -> i64 {
    num.div_euclid(den) + (num.rem_euclid(den) != 0) as i64
}

// ── Tests ───────────────────────────────────────────────────────────────────
