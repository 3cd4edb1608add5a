//! Status derivation for scheduled content.
//!
//! A schedule window is in exactly one of three states relative to a given
//! "now": not yet started, running, or over. The derivation is a pure
//! function of `(start, end, now)` — a persisted status field is never
//! trusted over it when the two disagree (see [`crate::sweep`]).

use serde::{Deserialize, Serialize};

use crate::instant::Instant;

/// Where a schedule window stands relative to a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleStatus {
    /// The window has not started yet (`now < start`).
    Upcoming,
    /// The window is running (`start <= now <= end`, boundaries inclusive).
    Active,
    /// The window is over (`now > end`).
    Expired,
}

impl std::fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleStatus::Upcoming => write!(f, "upcoming"),
            ScheduleStatus::Active => write!(f, "active"),
            ScheduleStatus::Expired => write!(f, "expired"),
        }
    }
}

/// Derive the status of a window at `now`.
///
/// Both boundaries count as [`ScheduleStatus::Active`]: a window is live
/// from the first instant of its start through the last instant of its end.
///
/// # Examples
///
/// ```
/// use schedule_engine::{derive_status, Instant, ScheduleStatus};
///
/// let start = Instant::parse_iso("2025-06-01T09:00:00Z").unwrap();
/// let end = Instant::parse_iso("2025-06-01T17:00:00Z").unwrap();
/// let noon = Instant::parse_iso("2025-06-01T12:00:00Z").unwrap();
/// assert_eq!(derive_status(start, end, noon), ScheduleStatus::Active);
/// ```
pub fn derive_status(start: Instant, end: Instant, now: Instant) -> ScheduleStatus {
    if now < start {
        ScheduleStatus::Upcoming
    } else if now > end {
        ScheduleStatus::Expired
    } else {
        ScheduleStatus::Active
    }
}

/// Whether `now` falls inside the window, boundaries inclusive.
///
/// Equivalent to `derive_status(start, end, now) == ScheduleStatus::Active`.
pub fn is_within_range(start: Instant, end: Instant, now: Instant) -> bool {
    derive_status(start, end, now) == ScheduleStatus::Active
}

/// Strictly before `now`. An absent instant is neither past nor future.
pub fn is_past(instant: Option<Instant>, now: Instant) -> bool {
    matches!(instant, Some(t) if t < now)
}

/// Strictly after `now`. An absent instant is neither past nor future.
pub fn is_future(instant: Option<Instant>, now: Instant) -> bool {
    matches!(instant, Some(t) if t > now)
}

// ── Tests ───────────────────────────────────────────────────────────────────
