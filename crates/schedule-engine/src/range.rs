//! Validated schedule windows.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Bound, RangeError, Result};
use crate::instant::Instant;
use crate::status::{derive_status, ScheduleStatus};

/// A `(start, end)` pair with the invariant `start < end`.
///
/// The invariant is strict: equal bounds are invalid, a zero-length window
/// is not permitted. A `TimeRange` can only be obtained through
/// [`TimeRange::new`] or [`validate_range`], so holding one is proof the
/// invariant held at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TimeRange {
    start: Instant,
    end: Instant,
}

impl TimeRange {
    /// Construct a window, rejecting `start >= end`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvertedRange`] when the ordering invariant is
    /// violated.
    pub fn new(start: Instant, end: Instant) -> Result<Self> {
        if start >= end {
            return Err(RangeError::InvertedRange { start, end });
        }
        Ok(TimeRange { start, end })
    }

    pub fn start(&self) -> Instant {
        self.start
    }

    pub fn end(&self) -> Instant {
        self.end
    }

    /// Status of this window at `now`.
    pub fn status(&self, now: Instant) -> ScheduleStatus {
        derive_status(self.start, self.end, now)
    }

    /// Whether `now` falls inside this window, boundaries inclusive.
    pub fn contains(&self, now: Instant) -> bool {
        self.status(now) == ScheduleStatus::Active
    }
}

/// Validate a window whose endpoints may be absent.
///
/// This is the form-submission entry point: both errors are meant to be
/// surfaced verbatim as user-facing validation messages.
///
/// # Errors
///
/// Returns [`RangeError::MissingBound`] when either endpoint is absent
/// (naming which one), or [`RangeError::InvertedRange`] when both are
/// present but `start >= end`.
///
/// # Examples
///
/// ```
/// use schedule_engine::{validate_range, Instant, RangeError};
///
/// let start = Instant::parse_iso("2025-06-01T09:00:00Z").unwrap();
/// let end = Instant::parse_iso("2025-06-01T17:00:00Z").unwrap();
///
/// assert!(validate_range(Some(start), Some(end)).is_ok());
/// assert!(matches!(
///     validate_range(Some(end), Some(start)),
///     Err(RangeError::InvertedRange { .. })
/// ));
/// ```
pub fn validate_range(start: Option<Instant>, end: Option<Instant>) -> Result<TimeRange> {
    match (start, end) {
        (None, None) => Err(RangeError::MissingBound(Bound::Both)),
        (None, Some(_)) => Err(RangeError::MissingBound(Bound::Start)),
        (Some(_), None) => Err(RangeError::MissingBound(Bound::End)),
        (Some(start), Some(end)) => TimeRange::new(start, end),
    }
}

/// Re-validates the ordering invariant, so an inverted stored range is a
/// decode error rather than a live `TimeRange`.
impl<'de> Deserialize<'de> for TimeRange {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawRange {
            start: Instant,
            end: Instant,
        }

        let raw = RawRange::deserialize(deserializer)?;
        TimeRange::new(raw.start, raw.end).map_err(serde::de::Error::custom)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
