//! # schedule-engine
//!
//! Deterministic schedule-window computation for scheduled content.
//!
//! Ads and events carry a `(start, end)` window and a derived three-state
//! status (`upcoming` / `active` / `expired`). This crate owns every
//! conversion, comparison, and derived fact needed to schedule an entity
//! over a time window, independent of the storage and UI layers: canonical
//! instant normalization from the shapes stored documents use, local
//! wall-clock form I/O, strict range validation, status derivation, and
//! calendar-aware arithmetic.
//!
//! Everything is pure and stateless. "Now" is an explicit parameter on the
//! core functions — the ambient clock is read only by the documented
//! convenience wrappers — and every local-time-dependent operation takes
//! its timezone explicitly, so results are deterministic across processes.
//!
//! ## Modules
//!
//! - [`instant`] — the canonical [`Instant`] value type
//! - [`normalize`] — stored raw shapes → canonical instant
//! - [`local`] — wall-clock form rendering and parsing
//! - [`status`] — `upcoming` / `active` / `expired` derivation
//! - [`range`] — validated `(start, end)` windows
//! - [`adjust`] — calendar-aware arithmetic and rounding
//! - [`sweep`] — pure planning for persisted-status reconciliation
//! - [`error`] — error types

pub mod adjust;
pub mod error;
pub mod instant;
pub mod local;
pub mod normalize;
pub mod range;
pub mod status;
pub mod sweep;

pub use adjust::{
    add_days, add_hours, days_between, end_of_day, hours_between, now_plus_minutes_rounded,
    plus_minutes_rounded, start_of_day,
};
pub use error::{Bound, RangeError, Result};
pub use instant::Instant;
pub use local::{
    from_local_input, to_display_string, to_display_string_styled, to_local_input,
    try_from_local_input, DisplayStyle,
};
pub use normalize::{normalize, try_normalize, RawInstant};
pub use range::{validate_range, TimeRange};
pub use status::{derive_status, is_future, is_past, is_within_range, ScheduleStatus};
pub use sweep::{plan_status_sweep, StatusChange, SweepEntry};
