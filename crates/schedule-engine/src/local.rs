//! Local wall-clock form rendering and parsing.
//!
//! Schedule forms edit wall-clock strings (`YYYY-MM-DDTHH:MM`, the shape a
//! `datetime-local` field produces) while storage keeps canonical instants.
//! Every function here takes the timezone explicitly — the engine never
//! consults the ambient process timezone, so renderings are deterministic
//! and testable across zones.

use chrono::{NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::instant::Instant;

const LOCAL_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";
const NOT_SET: &str = "Not set";

/// Long-form rendering style for [`to_display_string_styled`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayStyle {
    /// Date and time, e.g. "January 5, 2025, 02:30 PM".
    #[default]
    Full,
    /// Date only, e.g. "January 5, 2025".
    DateOnly,
    /// Time only, e.g. "02:30 PM".
    TimeOnly,
}

/// Render an instant as a `YYYY-MM-DDTHH:MM` wall-clock string in `tz`.
///
/// An absent instant yields the empty string, which is what an untouched
/// form field holds.
///
/// # Examples
///
/// ```
/// use chrono_tz::UTC;
/// use schedule_engine::{to_local_input, Instant};
///
/// let t = Instant::parse_iso("2025-06-01T09:00:00Z").unwrap();
/// assert_eq!(to_local_input(Some(t), UTC), "2025-06-01T09:00");
/// assert_eq!(to_local_input(None, UTC), "");
/// ```
pub fn to_local_input(instant: Option<Instant>, tz: Tz) -> String {
    match instant {
        Some(t) => t
            .as_datetime()
            .with_timezone(&tz)
            .format(LOCAL_INPUT_FORMAT)
            .to_string(),
        None => String::new(),
    }
}

/// Parse a `YYYY-MM-DDTHH:MM` wall-clock string in `tz` into an instant.
///
/// Accepts an optional seconds component (`HH:MM:SS`), which some browsers
/// emit. Empty or malformed input yields `None`. A wall-clock that is
/// ambiguous at a DST fall-back resolves to the earlier mapping; one that
/// falls inside a spring-forward gap resolves to the first valid wall-clock
/// after the gap.
pub fn try_from_local_input(text: &str, tz: Tz) -> Option<Instant> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let naive = NaiveDateTime::parse_from_str(text, LOCAL_INPUT_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S"))
        .ok()?;
    resolve_local(&tz, naive).map(|dt| Instant::from(dt.with_timezone(&Utc)))
}

/// Total variant of [`try_from_local_input`]: empty or malformed input
/// yields "now".
///
/// The default keeps form handlers total but substitutes a plausible value
/// for missing data — callers that must detect absence use the strict
/// variant instead.
pub fn from_local_input(text: &str, tz: Tz) -> Instant {
    try_from_local_input(text, tz).unwrap_or_else(Instant::now)
}

/// Render an instant in the default long form, e.g.
/// "January 5, 2025, 02:30 PM". An absent instant yields `"Not set"`.
pub fn to_display_string(instant: Option<Instant>, tz: Tz) -> String {
    to_display_string_styled(instant, tz, DisplayStyle::default())
}

/// Render an instant in the given [`DisplayStyle`]. An absent instant
/// yields `"Not set"` in every style.
pub fn to_display_string_styled(instant: Option<Instant>, tz: Tz, style: DisplayStyle) -> String {
    let Some(t) = instant else {
        return NOT_SET.to_string();
    };
    let local = t.as_datetime().with_timezone(&tz);
    let format = match style {
        DisplayStyle::Full => "%B %-d, %Y, %I:%M %p",
        DisplayStyle::DateOnly => "%B %-d, %Y",
        DisplayStyle::TimeOnly => "%I:%M %p",
    };
    local.format(format).to_string()
}

/// Map a naive wall-clock onto `tz`, keeping the mapping total.
///
/// Ambiguous wall-clocks (DST fall-back) take the earlier instant. Wall-
/// clocks inside a spring-forward gap walk forward in quarter-hour steps to
/// the first valid time; transitions larger than three hours do not occur
/// in the IANA database.
pub(crate) fn resolve_local(tz: &Tz, naive: NaiveDateTime) -> Option<chrono::DateTime<Tz>> {
    tz.from_local_datetime(&naive).earliest().or_else(|| {
        (1..=12).find_map(|step| {
            let nudged = naive + chrono::Duration::minutes(15 * step);
            tz.from_local_datetime(&nudged).earliest()
        })
    })
}

// ── Tests ───────────────────────────────────────────────────────────────────
