//! The canonical in-memory instant representation.
//!
//! Stored documents carry points in time in three shapes: an epoch pair
//! (`{seconds, nanoseconds}`), an ISO/RFC date-time string, or a native
//! `chrono` value. All three normalize losslessly into [`Instant`], which is
//! what every comparison, derivation, and rendering in this crate operates
//! on. The type is an opaque wrapper around `DateTime<Utc>` with exact
//! equality and total ordering at nanosecond precision.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::normalize::{try_normalize, RawInstant};

/// An opaque, totally-ordered point in time with nanosecond precision.
///
/// `Instant` is a value type: operations never mutate one in place, they
/// produce new values. Ordering and equality follow the underlying instant
/// exactly, so instants are usable as map keys and sort keys directly.
///
/// # Examples
///
/// ```
/// use schedule_engine::Instant;
///
/// let a = Instant::from_epoch(1_700_000_000, 0).unwrap();
/// let b = Instant::parse_iso("2023-11-14T22:13:20Z").unwrap();
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant(DateTime<Utc>);

impl Instant {
    /// The current instant, read from the ambient clock.
    ///
    /// The pure functions in this crate never call this themselves — "now"
    /// is always an explicit parameter. This constructor exists for callers
    /// at the boundary and for the documented defaulting wrappers
    /// ([`crate::normalize::normalize`], [`crate::local::from_local_input`]).
    pub fn now() -> Self {
        Instant(Utc::now())
    }

    /// Construct from an epoch pair as kept by the persistence layer.
    ///
    /// Returns `None` when the pair is outside the representable range
    /// (chrono rejects `nanoseconds >= 2_000_000_000` and seconds beyond
    /// roughly ±262,000 years).
    pub fn from_epoch(seconds: i64, nanoseconds: u32) -> Option<Self> {
        DateTime::from_timestamp(seconds, nanoseconds).map(Instant)
    }

    /// Parse a date-time string in any of the formats stored documents use.
    ///
    /// Tried in order: RFC 3339 (`2025-06-01T09:00:00Z`, offsets allowed),
    /// RFC 2822 (`Wed, 18 Feb 2026 14:30:00 GMT`), offset-less ISO
    /// (`2025-06-01T09:00:00`, interpreted as UTC), and a bare date
    /// (`2025-06-01`, midnight UTC). Returns `None` for anything else.
    pub fn parse_iso(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(Instant(dt.with_timezone(&Utc)));
        }
        if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
            return Some(Instant(dt.with_timezone(&Utc)));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(Instant(Utc.from_utc_datetime(&naive)));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M") {
            return Some(Instant(Utc.from_utc_datetime(&naive)));
        }
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            let naive = date.and_hms_opt(0, 0, 0)?;
            return Some(Instant(Utc.from_utc_datetime(&naive)));
        }
        None
    }

    /// Epoch seconds of this instant.
    pub fn timestamp(&self) -> i64 {
        self.0.timestamp()
    }

    /// Sub-second remainder in nanoseconds.
    pub fn subsec_nanos(&self) -> u32 {
        self.0.timestamp_subsec_nanos()
    }

    /// The underlying `chrono` value.
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// RFC 3339 string usable as a sort key.
    ///
    /// The fractional seconds are always rendered at full nine-digit width,
    /// so lexicographic order on the keys equals the instant order.
    ///
    /// # Examples
    ///
    /// ```
    /// use schedule_engine::Instant;
    ///
    /// let t = Instant::from_epoch(1_700_000_000, 0).unwrap();
    /// assert_eq!(t.sortable_key(), "2023-11-14T22:13:20.000000000Z");
    /// ```
    pub fn sortable_key(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Nanos, true)
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(dt: DateTime<Utc>) -> Self {
        Instant(dt)
    }
}

impl std::fmt::Display for Instant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

/// Serializes as the RFC 3339 transport form ([`Instant::sortable_key`]).
impl Serialize for Instant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.sortable_key())
    }
}

/// Deserializes from any accepted stored shape via [`RawInstant`].
///
/// This boundary is strict: a shape that does not normalize is a
/// deserialization error. The fall-back-to-now behavior belongs only to
/// [`crate::normalize::normalize`].
impl<'de> Deserialize<'de> for Instant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawInstant::deserialize(deserializer)?;
        try_normalize(&raw)
            .ok_or_else(|| de::Error::custom("instant is out of range or unparseable"))
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_epoch_matches_iso() {
        let a = Instant::from_epoch(1_700_000_000, 0).unwrap();
        let b = Instant::parse_iso("2023-11-14T22:13:20Z").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.timestamp(), 1_700_000_000);
        assert_eq!(a.subsec_nanos(), 0);
    }

    #[test]
    fn test_from_epoch_out_of_range() {
        assert!(Instant::from_epoch(i64::MAX, 0).is_none());
        assert!(Instant::from_epoch(0, 2_000_000_000).is_none());
    }

    #[test]
    fn test_parse_iso_with_offset() {
        let t = Instant::parse_iso("2025-06-01T12:00:00+02:00").unwrap();
        assert_eq!(t, Instant::parse_iso("2025-06-01T10:00:00Z").unwrap());
    }

    #[test]
    fn test_parse_rfc2822() {
        let t = Instant::parse_iso("Wed, 18 Feb 2026 14:30:00 GMT").unwrap();
        assert_eq!(t, Instant::parse_iso("2026-02-18T14:30:00Z").unwrap());
    }

    #[test]
    fn test_parse_offsetless_iso_is_utc() {
        let t = Instant::parse_iso("2025-06-01T09:00:00").unwrap();
        assert_eq!(t.timestamp(), Instant::parse_iso("2025-06-01T09:00:00Z").unwrap().timestamp());
    }

    #[test]
    fn test_parse_bare_date_is_utc_midnight() {
        let t = Instant::parse_iso("2025-06-01").unwrap();
        assert_eq!(t, Instant::parse_iso("2025-06-01T00:00:00Z").unwrap());
    }

    #[test]
    fn test_parse_garbage_returns_none() {
        assert!(Instant::parse_iso("not-a-datetime").is_none());
        assert!(Instant::parse_iso("").is_none());
    }

    #[test]
    fn test_ordering_follows_instant() {
        let early = Instant::from_epoch(100, 0).unwrap();
        let later = Instant::from_epoch(100, 500_000_000).unwrap();
        assert!(early < later);
        assert_eq!(early.cmp(&later), std::cmp::Ordering::Less);
    }

    #[test]
    fn test_sortable_key_fixed_width() {
        let whole = Instant::from_epoch(100, 0).unwrap();
        let fractional = Instant::from_epoch(100, 500_000_000).unwrap();
        // Fixed nine-digit fraction keeps lexicographic order aligned with
        // the instant order even when the fraction is zero.
        assert_eq!(whole.sortable_key(), "1970-01-01T00:01:40.000000000Z");
        assert!(whole.sortable_key() < fractional.sortable_key());
    }

    #[test]
    fn test_serialize_as_transport_form() {
        let t = Instant::from_epoch(1_700_000_000, 0).unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"2023-11-14T22:13:20.000000000Z\"");
    }

    #[test]
    fn test_deserialize_from_iso_string() {
        let t: Instant = serde_json::from_str("\"2025-06-01T09:00:00Z\"").unwrap();
        assert_eq!(t, Instant::parse_iso("2025-06-01T09:00:00Z").unwrap());
    }

    #[test]
    fn test_deserialize_from_epoch_map() {
        let t: Instant =
            serde_json::from_str(r#"{"seconds": 1700000000, "nanoseconds": 250000000}"#).unwrap();
        assert_eq!(t, Instant::from_epoch(1_700_000_000, 250_000_000).unwrap());
    }

    #[test]
    fn test_deserialize_malformed_is_error() {
        let result: Result<Instant, _> = serde_json::from_str("\"gobbledygook\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_display_is_rfc3339() {
        let t = Instant::parse_iso("2025-06-01T09:00:00Z").unwrap();
        assert_eq!(t.to_string(), "2025-06-01T09:00:00Z");
    }
}
