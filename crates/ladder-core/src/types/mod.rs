//! # Core Type Definitions
//!
//! This module contains the leaf types shared by every other module:
//! - The slider value (`Score`)
//! - Error types (`LadderError`)
//!
//! ## Determinism Guarantees
//!
//! A `Score` is an integer count of half points. Parsing and formatting go
//! through decimal text, so no floating-point arithmetic is ever performed
//! on a score.

use crate::primitives::{HALF_POINTS_PER_POINT, MAX_HALF_POINTS};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// SCORE
// =============================================================================

/// A criterion score on the `[0, 5]` scale in steps of `0.5`.
///
/// Internally a half-point count in `0..=10`. The default is `0`, which is a
/// valid score and not a "missing" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Score(u8);

impl Score {
    /// The lowest score (0.0).
    pub const MIN: Score = Score(0);

    /// The highest score (5.0).
    pub const MAX: Score = Score(MAX_HALF_POINTS);

    /// Create a score from a half-point count.
    pub fn from_half_points(half_points: u8) -> Result<Self, LadderError> {
        if half_points > MAX_HALF_POINTS {
            return Err(LadderError::ScoreOutOfRange(format_half_points(half_points)));
        }
        Ok(Self(half_points))
    }

    /// Create a score from a whole number of points.
    pub fn from_points(points: u8) -> Result<Self, LadderError> {
        let half_points = points
            .checked_mul(HALF_POINTS_PER_POINT)
            .ok_or_else(|| LadderError::ScoreOutOfRange(points.to_string()))?;
        Self::from_half_points(half_points)
    }

    /// Get the raw half-point count.
    #[must_use]
    pub const fn half_points(self) -> u8 {
        self.0
    }

    /// Parse decimal text such as `"3"`, `"3.5"` or `"4.50"`.
    ///
    /// Rejects non-numeric text, values outside `[0, 5]` and values that are
    /// not a multiple of `0.5`. Trailing zeros in the fraction are accepted.
    pub fn parse(text: &str) -> Result<Self, LadderError> {
        let trimmed = text.trim();
        let (negative, magnitude) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let (whole, fraction) = magnitude.split_once('.').unwrap_or((magnitude, ""));
        let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction)
        {
            return Err(LadderError::InvalidScore(text.to_string()));
        }

        let half = match fraction.trim_end_matches('0') {
            "" => 0,
            "5" => 1,
            _ => {
                if negative {
                    return Err(LadderError::ScoreOutOfRange(trimmed.to_string()));
                }
                return Err(LadderError::ScoreOffStep(trimmed.to_string()));
            }
        };

        let whole_points = if whole.is_empty() {
            0
        } else {
            // Anything that overflows u32 is far outside the scale anyway.
            whole
                .parse::<u32>()
                .map_err(|_| LadderError::ScoreOutOfRange(trimmed.to_string()))?
        };

        if negative && (whole_points > 0 || half > 0) {
            return Err(LadderError::ScoreOutOfRange(trimmed.to_string()));
        }

        let half_points = whole_points
            .checked_mul(u32::from(HALF_POINTS_PER_POINT))
            .and_then(|h| h.checked_add(half))
            .filter(|h| *h <= u32::from(MAX_HALF_POINTS))
            .ok_or_else(|| LadderError::ScoreOutOfRange(trimmed.to_string()))?;

        Self::from_half_points(half_points as u8)
    }

    /// Convert to an `f64` for display-oriented consumers (JSON, charts).
    ///
    /// Goes through the decimal text form, so no float arithmetic happens.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        self.to_string().parse().unwrap_or_default()
    }
}

fn format_half_points(half_points: u8) -> String {
    let whole = half_points / HALF_POINTS_PER_POINT;
    let tenths = if half_points % HALF_POINTS_PER_POINT == 0 {
        0
    } else {
        5
    };
    format!("{}.{}", whole, tenths)
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_half_points(self.0))
    }
}

impl FromStr for Score {
    type Err = LadderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<f64> for Score {
    type Error = LadderError;

    /// Accepts the value a slider widget emits.
    ///
    /// `f64`'s `Display` never uses exponent notation, so the decimal text
    /// parser sees exactly the digits of the value. NaN and infinities fail
    /// as non-numeric.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::parse(&value.to_string())
    }
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Score {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ScoreVisitor)
    }
}

struct ScoreVisitor;

impl Visitor<'_> for ScoreVisitor {
    type Value = Score;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a score between 0 and 5 in steps of 0.5")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Score, E> {
        let points =
            u8::try_from(v).map_err(|_| E::custom(LadderError::ScoreOutOfRange(v.to_string())))?;
        Score::from_points(points).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Score, E> {
        let unsigned =
            u64::try_from(v).map_err(|_| E::custom(LadderError::ScoreOutOfRange(v.to_string())))?;
        self.visit_u64(unsigned)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Score, E> {
        Score::try_from(v).map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Score, E> {
        Score::parse(v).map_err(E::custom)
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the Ladder system.
///
/// - No silent failures
/// - Use `Result<T, LadderError>` for fallible operations
/// - The CORE should never panic; all errors must be recoverable
#[derive(Debug, Error)]
pub enum LadderError {
    /// A role table is malformed (empty role, empty section, duplicate ids).
    /// Fatal at startup.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Navigation to a step outside `[1, 8]` or a non-numeric step.
    #[error("Invalid step: {0}")]
    InvalidStep(String),

    /// A score outside `[0, 5]`.
    #[error("Score out of range [0, 5]: {0}")]
    ScoreOutOfRange(String),

    /// A score inside the range but not on a 0.5 step.
    #[error("Score must be a multiple of 0.5: {0}")]
    ScoreOffStep(String),

    /// A score that is not a number at all.
    #[error("Invalid score: {0:?}")]
    InvalidScore(String),

    /// The requested role level does not exist.
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// The requested criterion does not exist in the given role.
    #[error("Unknown criterion '{criterion}' for role {role}")]
    UnknownCriterion { role: String, criterion: String },

    /// Qualitative notes exceed the length limit.
    #[error("Notes length {0} exceeds maximum {1} bytes")]
    NotesTooLong(usize, usize),

    /// An intake field (including the name) exceeds the length limit.
    #[error("Field '{field}' length {length} exceeds maximum {max} bytes")]
    FieldTooLong {
        field: &'static str,
        length: usize,
        max: usize,
    },

    /// A serialization or deserialization error occurred.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_half_steps() {
        assert_eq!(Score::parse("0").expect("parse").half_points(), 0);
        assert_eq!(Score::parse("3.5").expect("parse").half_points(), 7);
        assert_eq!(Score::parse("5").expect("parse").half_points(), 10);
        assert_eq!(Score::parse("4.50").expect("parse").half_points(), 9);
        assert_eq!(Score::parse(".5").expect("parse").half_points(), 1);
        assert_eq!(Score::parse("-0").expect("parse"), Score::MIN);
    }

    #[test]
    fn parse_rejects_out_of_range() {
        assert!(matches!(
            Score::parse("5.5"),
            Err(LadderError::ScoreOutOfRange(_))
        ));
        assert!(matches!(
            Score::parse("-0.5"),
            Err(LadderError::ScoreOutOfRange(_))
        ));
        assert!(matches!(
            Score::parse("99999999999999"),
            Err(LadderError::ScoreOutOfRange(_))
        ));
    }

    #[test]
    fn parse_rejects_off_step() {
        assert!(matches!(
            Score::parse("2.25"),
            Err(LadderError::ScoreOffStep(_))
        ));
        assert!(matches!(
            Score::parse("1.1"),
            Err(LadderError::ScoreOffStep(_))
        ));
    }

    #[test]
    fn parse_rejects_garbage() {
        for text in ["", "abc", "1e0", "NaN", "inf", "1.2.3", "."] {
            assert!(
                matches!(Score::parse(text), Err(LadderError::InvalidScore(_))),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn try_from_f64_uses_decimal_form() {
        assert_eq!(Score::try_from(2.5).expect("score").half_points(), 5);
        assert_eq!(Score::try_from(5.0).expect("score"), Score::MAX);
        assert!(Score::try_from(f64::NAN).is_err());
        assert!(Score::try_from(6.0).is_err());
    }

    #[test]
    fn display_always_has_one_decimal() {
        assert_eq!(Score::MIN.to_string(), "0.0");
        assert_eq!(Score::from_half_points(7).expect("score").to_string(), "3.5");
        assert_eq!(Score::MAX.to_string(), "5.0");
    }

    #[test]
    fn from_points_bounds() {
        assert_eq!(Score::from_points(5).expect("score"), Score::MAX);
        assert!(Score::from_points(6).is_err());
        assert!(Score::from_points(200).is_err());
    }
}
