//! Pure planning for persisted-status reconciliation sweeps.
//!
//! The surrounding system persists a status field alongside each schedule
//! window and periodically reconciles it against the derivation — reading
//! entities, filtering the ones whose recorded status no longer matches,
//! and writing the corrections back. The planning half of that job is pure
//! and lives here; the caller owns the reads and writes.
//!
//! The derived status is authoritative: a recorded field is a cached
//! projection whose staleness is bounded by the sweep cadence. Because the
//! plan is a deterministic function of `(entries, now)`, re-planning after
//! applying a plan at the same `now` yields an empty plan, so overlapping
//! sweeps converge instead of fighting.

use serde::Serialize;

use crate::instant::Instant;
use crate::range::TimeRange;
use crate::status::ScheduleStatus;

/// One entity's recorded status and schedule window, as read from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SweepEntry<K> {
    /// Storage key of the entity (document id, etc.).
    pub key: K,
    /// The status field as persisted.
    pub recorded: ScheduleStatus,
    /// The entity's validated schedule window.
    pub window: TimeRange,
}

/// A correction the caller should persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusChange<K> {
    pub key: K,
    pub from: ScheduleStatus,
    pub to: ScheduleStatus,
}

/// Compute the corrections needed to bring recorded statuses in line with
/// the derivation at `now`.
///
/// Returns one [`StatusChange`] per entry whose recorded status disagrees
/// with [`TimeRange::status`]; entries already in agreement produce
/// nothing. Order follows the input.
///
/// # Examples
///
/// ```
/// use schedule_engine::{plan_status_sweep, Instant, ScheduleStatus, SweepEntry, TimeRange};
///
/// let start = Instant::parse_iso("2025-06-01T09:00:00Z").unwrap();
/// let end = Instant::parse_iso("2025-06-01T17:00:00Z").unwrap();
/// let entries = vec![SweepEntry {
///     key: "ad-1",
///     recorded: ScheduleStatus::Active,
///     window: TimeRange::new(start, end).unwrap(),
/// }];
///
/// let after_close = Instant::parse_iso("2025-06-02T00:00:00Z").unwrap();
/// let plan = plan_status_sweep(&entries, after_close);
/// assert_eq!(plan.len(), 1);
/// assert_eq!(plan[0].to, ScheduleStatus::Expired);
/// ```
pub fn plan_status_sweep<K: Clone>(
    entries: &[SweepEntry<K>],
    now: Instant,
) -> Vec<StatusChange<K>> {
    entries
        .iter()
        .filter_map(|entry| {
            let derived = entry.window.status(now);
            (derived != entry.recorded).then(|| StatusChange {
                key: entry.key.clone(),
                from: entry.recorded,
                to: derived,
            })
        })
        .collect()
}

// ── Tests ───────────────────────────────────────────────────────────────────
