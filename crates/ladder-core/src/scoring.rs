//! # Scoring
//!
//! Pure aggregation functions over criterion scores.
//!
//! Derived values are never stored: a section average and a role overall are
//! recomputed from the owned criteria on every read, so a caller can never
//! observe a stale average after a score update.
//!
//! ## Exact Arithmetic
//!
//! Averages are exact rationals ([`Mean`]). Setting every criterion to `v`
//! yields exactly `v`, and the mean of identical section averages is that
//! same average, with no rounding drift. Rounding only happens at the display
//! boundary (`to_fixed_1`, `millis`).

use crate::primitives::{HALF_POINTS_PER_POINT, STEP_HALF_POINTS};
use crate::{LadderError, Score};
use serde::{Serialize, Serializer};
use std::fmt;

// =============================================================================
// MEAN
// =============================================================================

/// An exact arithmetic mean, in points, kept as a reduced fraction.
///
/// The denominator is never zero. Two means are equal iff their values are
/// equal, because the fraction is always stored in lowest terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mean {
    numerator: u128,
    denominator: u128,
}

impl Default for Mean {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Mean {
    /// The mean of all-zero scores.
    pub const ZERO: Mean = Mean {
        numerator: 0,
        denominator: 1,
    };

    fn reduced(numerator: u128, denominator: u128) -> Result<Self, LadderError> {
        if denominator == 0 {
            return Err(LadderError::Configuration(
                "cannot average an empty collection".to_string(),
            ));
        }
        let divisor = gcd(numerator, denominator);
        Ok(Self {
            numerator: numerator / divisor,
            denominator: denominator / divisor,
        })
    }

    /// Arithmetic mean of a non-empty set of scores.
    pub fn of_scores(scores: impl IntoIterator<Item = Score>) -> Result<Self, LadderError> {
        let (sum, count) = scores
            .into_iter()
            .fold((0u128, 0u128), |(sum, count), score| {
                (
                    sum.saturating_add(u128::from(score.half_points())),
                    count.saturating_add(1),
                )
            });
        Self::reduced(sum, count.saturating_mul(u128::from(HALF_POINTS_PER_POINT)))
    }

    /// Arithmetic mean of a non-empty set of means.
    pub fn of_means(means: impl IntoIterator<Item = Mean>) -> Result<Self, LadderError> {
        let mut total = Self::ZERO;
        let mut count: u128 = 0;
        for mean in means {
            total = total.checked_add(mean)?;
            count = count.saturating_add(1);
        }
        if count == 0 {
            return Err(LadderError::Configuration(
                "cannot average an empty collection".to_string(),
            ));
        }
        let denominator = total
            .denominator
            .checked_mul(count)
            .ok_or_else(overflow)?;
        Self::reduced(total.numerator, denominator)
    }

    fn checked_add(self, other: Mean) -> Result<Self, LadderError> {
        let left = self
            .numerator
            .checked_mul(other.denominator)
            .ok_or_else(overflow)?;
        let right = other
            .numerator
            .checked_mul(self.denominator)
            .ok_or_else(overflow)?;
        let numerator = left.checked_add(right).ok_or_else(overflow)?;
        let denominator = self
            .denominator
            .checked_mul(other.denominator)
            .ok_or_else(overflow)?;
        Self::reduced(numerator, denominator)
    }

    /// Numerator of the reduced fraction.
    #[must_use]
    pub const fn numerator(&self) -> u128 {
        self.numerator
    }

    /// Denominator of the reduced fraction (never zero).
    #[must_use]
    pub const fn denominator(&self) -> u128 {
        self.denominator
    }

    /// Value in `1/scale` units, rounded half up.
    fn scaled(&self, scale: u128) -> u128 {
        let doubled = self.numerator.saturating_mul(scale).saturating_mul(2);
        doubled.saturating_add(self.denominator) / self.denominator.saturating_mul(2)
    }

    /// Value in thousandths of a point, rounded half up.
    #[must_use]
    pub fn millis(&self) -> u128 {
        self.scaled(1000)
    }

    /// Format with one decimal, rounded half up (`2.25` becomes `"2.3"`).
    #[must_use]
    pub fn to_fixed_1(&self) -> String {
        let tenths = self.scaled(10);
        format!("{}.{}", tenths / 10, tenths % 10)
    }

    /// Convert to an `f64` with three decimals of precision.
    ///
    /// Goes through decimal text, so no float arithmetic happens.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        let millis = self.millis();
        format!("{}.{:03}", millis / 1000, millis % 1000)
            .parse()
            .unwrap_or_default()
    }

    /// Whether the mean is exactly the given score.
    #[must_use]
    pub fn equals_score(&self, score: Score) -> bool {
        *self == Mean::from(score)
    }
}

impl From<Score> for Mean {
    fn from(score: Score) -> Self {
        let numerator = u128::from(score.half_points());
        let denominator = u128::from(HALF_POINTS_PER_POINT);
        let divisor = gcd(numerator, denominator);
        Self {
            numerator: numerator / divisor,
            denominator: denominator / divisor,
        }
    }
}

impl fmt::Display for Mean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fixed_1())
    }
}

impl Serialize for Mean {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

fn overflow() -> LadderError {
    LadderError::Configuration("score aggregation overflowed".to_string())
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    // gcd(0, 0) only arises for a zero denominator, rejected by the caller.
    a.max(1)
}

// =============================================================================
// PURE AGGREGATION FUNCTIONS
// =============================================================================

/// Average of a section's criterion scores.
///
/// An empty section is a configuration error, never a runtime zero.
pub fn section_average(scores: &[Score]) -> Result<Mean, LadderError> {
    if scores.is_empty() {
        return Err(LadderError::Configuration(
            "section has no criteria".to_string(),
        ));
    }
    Mean::of_scores(scores.iter().copied())
}

/// Overall score of a role: the mean of its section averages.
///
/// Every section weighs the same regardless of how many criteria it holds.
pub fn role_overall(section_averages: &[Mean]) -> Result<Mean, LadderError> {
    if section_averages.is_empty() {
        return Err(LadderError::Configuration("role has no sections".to_string()));
    }
    Mean::of_means(section_averages.iter().copied())
}

// =============================================================================
// SCORE SCALE (slider contract)
// =============================================================================

/// The `(min, max, step)` contract of the score slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreScale {
    pub min: Score,
    pub max: Score,
    step_half_points: u8,
}

impl Default for ScoreScale {
    fn default() -> Self {
        Self {
            min: Score::MIN,
            max: Score::MAX,
            step_half_points: STEP_HALF_POINTS,
        }
    }
}

impl ScoreScale {
    /// The slider step as a score (0.5 for the default scale).
    #[must_use]
    pub fn step(&self) -> Score {
        Score::from_half_points(self.step_half_points).unwrap_or(Score::MIN)
    }

    /// Check that a score lies on this scale.
    pub fn check(&self, score: Score) -> Result<Score, LadderError> {
        if score < self.min || score > self.max {
            return Err(LadderError::ScoreOutOfRange(score.to_string()));
        }
        let offset = score.half_points().saturating_sub(self.min.half_points());
        if self.step_half_points > 0 && offset % self.step_half_points != 0 {
            return Err(LadderError::ScoreOffStep(score.to_string()));
        }
        Ok(score)
    }

    /// Whole-point labels shown under the slider (`0..=5`).
    #[must_use]
    pub fn labels(&self) -> Vec<u8> {
        let low = self.min.half_points().div_ceil(HALF_POINTS_PER_POINT);
        let high = self.max.half_points() / HALF_POINTS_PER_POINT;
        (low..=high).collect()
    }
}

// =============================================================================
// TESTS
// =============================================================================
