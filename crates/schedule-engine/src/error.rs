//! Error types for schedule-window validation.

use thiserror::Error;

use crate::instant::Instant;

/// Which endpoint of a schedule window is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Start,
    End,
    Both,
}

impl std::fmt::Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bound::Start => write!(f, "start"),
            Bound::End => write!(f, "end"),
            Bound::Both => write!(f, "start and end"),
        }
    }
}

/// Validation failures for a schedule window.
///
/// Both variants are recoverable and carry messages suitable for surfacing
/// verbatim as form-validation errors. Every other operation in this crate
/// is total and substitutes a documented default instead of failing.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    #[error("Missing bound: {0}")]
    MissingBound(Bound),

    #[error("Inverted range: start {start} is not before end {end}")]
    InvertedRange { start: Instant, end: Instant },
}

pub type Result<T> = std::result::Result<T, RangeError>;
