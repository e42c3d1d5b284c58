//! Adaptive difficulty weights
//!
//! [`DifficultyWeights`] holds the selection probability of each
//! [`Difficulty`] tier in percentage points. Weights are stored in tenths of a
//! point so that the fractional reward steps (e.g. `+3.5`) keep the total
//! exactly at 100 no matter how many adjustments are applied.
//!
//! # Selection
//!
//! A uniform draw `r ∈ [0, 100)` is mapped through cumulative thresholds in
//! tier order:
//!
//! | Condition               | Tier   |
//! |-------------------------|--------|
//! | `r < easy`              | Easy   |
//! | `r < easy + medium`     | Medium |
//! | otherwise               | Hard   |

use super::tier::Difficulty;
use crate::DomainError;

/// Internal resolution: one unit is a tenth of a percentage point.
const UNITS_PER_POINT: u32 = 10;
const TOTAL_UNITS: u32 = 100 * UNITS_PER_POINT;

fn to_units(points: f64, field: &'static str) -> Result<u32, DomainError> {
    if !points.is_finite() || points < 0.0 {
        return Err(DomainError::InvalidWeight {
            field,
            value: points,
        });
    }
    Ok((points * UNITS_PER_POINT as f64).round() as u32)
}

fn to_points(units: u32) -> f64 {
    units as f64 / UNITS_PER_POINT as f64
}

/// Per-correct-answer shift of probability mass toward harder tiers.
///
/// `easy` is removed from the easy tier and split into `medium` and `hard`;
/// the two increments must add up to the decrement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyStep {
    easy: u32,
    medium: u32,
    hard: u32,
}

impl DifficultyStep {
    /// Build a step from percentage-point amounts.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidWeight`] for negative or non-finite
    /// amounts, and [`DomainError::UnbalancedStep`] when the easy decrement
    /// is zero or differs from `medium + hard`.
    pub fn new(easy: f64, medium: f64, hard: f64) -> Result<Self, DomainError> {
        let step = Self {
            easy: to_units(easy, "easy")?,
            medium: to_units(medium, "medium")?,
            hard: to_units(hard, "hard")?,
        };
        if step.easy == 0 || step.medium + step.hard != step.easy {
            return Err(DomainError::UnbalancedStep {
                easy,
                medium,
                hard,
            });
        }
        Ok(step)
    }

    pub fn easy(&self) -> f64 {
        to_points(self.easy)
    }

    pub fn medium(&self) -> f64 {
        to_points(self.medium)
    }

    pub fn hard(&self) -> f64 {
        to_points(self.hard)
    }
}

impl Default for DifficultyStep {
    /// −5 easy, +3.5 medium, +1.5 hard
    fn default() -> Self {
        Self {
            easy: 50,
            medium: 35,
            hard: 15,
        }
    }
}

/// Selection probabilities for each difficulty tier (Value Object)
///
/// Invariant: `easy + medium + hard == 100` at all times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyWeights {
    easy: u32,
    medium: u32,
    hard: u32,
}

impl DifficultyWeights {
    /// Weights at the start of every session: only easy questions.
    pub fn starting() -> Self {
        Self {
            easy: TOTAL_UNITS,
            medium: 0,
            hard: 0,
        }
    }

    /// Build weights from percentage points.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidWeight`] for negative or non-finite
    /// values and [`DomainError::WeightsNotNormalized`] when they do not sum
    /// to 100.
    pub fn from_points(easy: f64, medium: f64, hard: f64) -> Result<Self, DomainError> {
        let weights = Self {
            easy: to_units(easy, "easy")?,
            medium: to_units(medium, "medium")?,
            hard: to_units(hard, "hard")?,
        };
        let total = weights.easy + weights.medium + weights.hard;
        if total != TOTAL_UNITS {
            return Err(DomainError::WeightsNotNormalized(to_points(total)));
        }
        Ok(weights)
    }

    pub fn easy(&self) -> f64 {
        to_points(self.easy)
    }

    pub fn medium(&self) -> f64 {
        to_points(self.medium)
    }

    pub fn hard(&self) -> f64 {
        to_points(self.hard)
    }

    /// Sum of all weights in percentage points (always 100).
    pub fn total(&self) -> f64 {
        to_points(self.easy + self.medium + self.hard)
    }

    /// True once the easy tier has been fully drained.
    pub fn is_terminal(&self) -> bool {
        self.easy == 0
    }

    /// Map a draw in `[0, 100)` onto a tier via cumulative thresholds.
    pub fn select(&self, draw: f64) -> Difficulty {
        let easy = self.easy();
        if draw < easy {
            Difficulty::Easy
        } else if draw < easy + self.medium() {
            Difficulty::Medium
        } else {
            Difficulty::Hard
        }
    }

    /// Shift weight toward harder tiers after a correct answer.
    ///
    /// When less than a full step remains in the easy tier, the remainder is
    /// split between medium and hard in the step's proportions. Returns
    /// `false` (and leaves the weights untouched) once easy is exhausted.
    pub fn advance(&mut self, step: &DifficultyStep) -> bool {
        if self.easy == 0 || step.easy == 0 {
            return false;
        }

        let taken = step.easy.min(self.easy);
        let to_medium = if taken == step.easy {
            step.medium
        } else {
            (step.medium * taken + step.easy / 2) / step.easy
        };
        let to_hard = taken - to_medium;

        self.easy -= taken;
        self.medium += to_medium;
        self.hard += to_hard;
        true
    }
}

impl Default for DifficultyWeights {
    fn default() -> Self {
        Self::starting()
    }
}

impl std::fmt::Display for DifficultyWeights {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "easy {:.1} / medium {:.1} / hard {:.1}",
            self.easy(),
            self.medium(),
            self.hard()
        )
    }
}
