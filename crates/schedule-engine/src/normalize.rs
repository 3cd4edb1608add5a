//! Normalization of stored instant shapes into the canonical [`Instant`].
//!
//! Stored documents accumulated three representations of the same concept
//! over time. Rather than sniffing shapes at use sites, the deserialization
//! layer decodes into the explicit [`RawInstant`] union and everything past
//! that point works with [`Instant`] only.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::instant::Instant;

/// A point in time as it appears in a stored document.
///
/// Deserialization is untagged: an object with `seconds`/`nanoseconds`
/// fields decodes as [`RawInstant::Epoch`], a string as [`RawInstant::Iso`].
/// The [`RawInstant::Native`] variant is constructed in-process (via the
/// `From` impls) rather than from serialized input.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawInstant {
    /// Epoch pair, the persistence layer's stored form. A document that
    /// omits the sub-second field decodes with `nanoseconds = 0`.
    Epoch {
        seconds: i64,
        #[serde(default)]
        nanoseconds: u32,
    },
    /// ISO/RFC date-time string, the transport form.
    Iso(String),
    /// Native in-process value.
    Native(DateTime<Utc>),
}

impl From<Instant> for RawInstant {
    fn from(instant: Instant) -> Self {
        RawInstant::Native(instant.as_datetime())
    }
}

impl From<DateTime<Utc>> for RawInstant {
    fn from(dt: DateTime<Utc>) -> Self {
        RawInstant::Native(dt)
    }
}

/// Normalize a raw shape into the canonical instant, or `None` when the
/// shape does not denote one (epoch pair out of range, unparseable string).
///
/// This is the strict variant: callers that must distinguish "absent or
/// malformed" from a real value use this and handle `None` themselves.
pub fn try_normalize(raw: &RawInstant) -> Option<Instant> {
    match raw {
        RawInstant::Epoch {
            seconds,
            nanoseconds,
        } => Instant::from_epoch(*seconds, *nanoseconds),
        RawInstant::Iso(s) => Instant::parse_iso(s),
        RawInstant::Native(dt) => Some(Instant::from(*dt)),
    }
}

/// Normalize a raw shape into the canonical instant, falling back to "now"
/// when the shape does not denote one.
///
/// The fallback keeps UI call sites total, at the cost of masking missing
/// data behind a plausible-looking value — callers that care use
/// [`try_normalize`] instead.
pub fn normalize(raw: &RawInstant) -> Instant {
    try_normalize(raw).unwrap_or_else(Instant::now)
}

// ── Tests ───────────────────────────────────────────────────────────────────
