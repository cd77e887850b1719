use crate::util::float_ext::FloatExt;

use super::{rank::ScoreRank, CurveError, RatingCurve};

/// An affine function of the internal level, `level_factor * level + offset`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelTerm {
    #[cfg_attr(feature = "serde", serde(default))]
    pub level_factor: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub offset: f64,
}

impl LevelTerm {
    /// A term independent of the level.
    pub const fn constant(offset: f64) -> Self {
        Self {
            level_factor: 0.0,
            offset,
        }
    }

    pub const fn scaled(level_factor: f64, offset: f64) -> Self {
        Self {
            level_factor,
            offset,
        }
    }

    pub fn eval(&self, internal_level: f64) -> f64 {
        self.level_factor * internal_level + self.offset
    }
}

/// How a [`ScoreBreakpoint`] turns a score into a bonus.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum ScoreBonus {
    /// The same bonus for every score of the branch.
    Flat { bonus: LevelTerm },
    /// `base`, plus `step_bonus` for each full `step_size` points above the
    /// branch's minimum score.
    Stepped {
        base: f64,
        step_size: u32,
        step_bonus: f64,
    },
    /// Linear interpolation from `lower` at the branch's minimum score to
    /// `upper` at `upper_score`.
    Interpolated {
        upper_score: u32,
        lower: LevelTerm,
        upper: LevelTerm,
    },
}

/// One branch of a [`ScoreDeltaCurve`], applying to scores of at least
/// `min_score`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreBreakpoint {
    pub min_score: u32,
    pub bonus: ScoreBonus,
}

impl ScoreBreakpoint {
    fn bonus(&self, internal_level: f64, score: u32) -> f64 {
        let above = score.saturating_sub(self.min_score);

        match self.bonus {
            ScoreBonus::Flat { bonus } => bonus.eval(internal_level),
            ScoreBonus::Stepped {
                base,
                step_size,
                step_bonus,
            } => {
                let steps = above.checked_div(step_size).unwrap_or(0);

                base + step_bonus * f64::from(steps)
            }
            ScoreBonus::Interpolated {
                upper_score,
                lower,
                upper,
            } => {
                let lower = lower.eval(internal_level);
                let upper = upper.eval(internal_level);
                let span = upper_score.saturating_sub(self.min_score);

                if span == 0 {
                    return lower;
                }

                lower + (upper - lower) * (f64::from(above) / f64::from(span))
            }
        }
    }
}

/// Rating curve that adds a score-dependent bonus onto the internal level.
///
/// Breakpoints are ordered by descending `min_score`; a score uses the
/// first breakpoint it reaches. The result is neither rounded nor clamped
/// so scores below the bottom branches may produce negative ratings for
/// negative levels. Callers truncate for display, see
/// [`ScoreDeltaAttributes::truncated`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreDeltaCurve {
    breakpoints: Vec<ScoreBreakpoint>,
}

impl ScoreDeltaCurve {
    /// Create a curve after validating its breakpoints.
    pub fn new(breakpoints: Vec<ScoreBreakpoint>) -> Result<Self, CurveError> {
        let curve = Self { breakpoints };
        curve.validate()?;

        Ok(curve)
    }

    /// The CHUNITHM rating table.
    ///
    /// | Score     | Bonus                                  |
    /// | --------: | -------------------------------------- |
    /// | 1,009,000 | +2.15                                  |
    /// | 1,007,500 | +2.00, +0.01 per 100                   |
    /// | 1,005,000 | +1.50, +0.01 per 50                    |
    /// | 1,000,000 | +1.00, +0.01 per 100                   |
    /// | 975,000   | ±0.00, +0.01 per 250                   |
    /// | 900,000   | -5.0 up to ±0.0 at 975,000             |
    /// | 800,000   | -(lv+5)/2 up to -5.0 at 900,000        |
    /// | 500,000   | -lv up to -(lv+5)/2 at 800,000         |
    /// | below     | -lv                                    |
    pub fn chunithm() -> Self {
        let minus_level = LevelTerm::scaled(-1.0, 0.0);
        let bbb = LevelTerm::scaled(-0.5, -2.5);

        let stepped = |min_score, base, step_size| ScoreBreakpoint {
            min_score,
            bonus: ScoreBonus::Stepped {
                base,
                step_size,
                step_bonus: 0.01,
            },
        };

        let interpolated = |min_score, upper_score, lower, upper| ScoreBreakpoint {
            min_score,
            bonus: ScoreBonus::Interpolated {
                upper_score,
                lower,
                upper,
            },
        };

        Self {
            breakpoints: vec![
                ScoreBreakpoint {
                    min_score: 1_009_000,
                    bonus: ScoreBonus::Flat {
                        bonus: LevelTerm::constant(2.15),
                    },
                },
                stepped(1_007_500, 2.0, 100),
                stepped(1_005_000, 1.5, 50),
                stepped(1_000_000, 1.0, 100),
                stepped(975_000, 0.0, 250),
                interpolated(
                    900_000,
                    975_000,
                    LevelTerm::constant(-5.0),
                    LevelTerm::constant(0.0),
                ),
                interpolated(800_000, 900_000, bbb, LevelTerm::constant(-5.0)),
                interpolated(500_000, 800_000, minus_level, bbb),
                ScoreBreakpoint {
                    min_score: 0,
                    bonus: ScoreBonus::Flat { bonus: minus_level },
                },
            ],
        }
    }

    pub fn breakpoints(&self) -> &[ScoreBreakpoint] {
        &self.breakpoints
    }

    /// Ensure breakpoints are strictly descending, reach down to a score of
    /// zero, and have non-zero step sizes.
    pub fn validate(&self) -> Result<(), CurveError> {
        let Some(last) = self.breakpoints.last() else {
            return Err(CurveError::Empty);
        };

        for (index, pair) in self.breakpoints.windows(2).enumerate() {
            if pair[0].min_score <= pair[1].min_score {
                return Err(CurveError::Unordered { index: index + 1 });
            }
        }

        let zero_step = self.breakpoints.iter().position(|bp| {
            matches!(bp.bonus, ScoreBonus::Stepped { step_size: 0, .. })
        });

        if let Some(index) = zero_step {
            return Err(CurveError::ZeroStep { index });
        }

        if last.min_score != 0 {
            return Err(CurveError::Uncovered);
        }

        Ok(())
    }

    /// The bonus a score adds onto the internal level.
    ///
    /// Scores below every breakpoint of an unvalidated curve get `-level`.
    pub fn bonus(&self, internal_level: f64, score: u32) -> f64 {
        self.breakpoints
            .iter()
            .find(|bp| score >= bp.min_score)
            .map_or(-internal_level, |bp| bp.bonus(internal_level, score))
    }

    /// Only the rating value, see [`RatingCurve::calculate`] for all
    /// attributes.
    pub fn rating(&self, internal_level: f64, score: u32) -> f64 {
        internal_level + self.bonus(internal_level, score)
    }
}

impl RatingCurve for ScoreDeltaCurve {
    type Score = u32;
    type Output = ScoreDeltaAttributes;

    fn calculate(&self, internal_level: f64, score: u32) -> ScoreDeltaAttributes {
        let bonus = self.bonus(internal_level, score);

        ScoreDeltaAttributes {
            internal_level,
            score,
            bonus,
            rating: internal_level + bonus,
            rank: ScoreRank::from_score(score),
        }
    }

    fn validate(&self) -> Result<(), CurveError> {
        ScoreDeltaCurve::validate(self)
    }
}

/// The result of a [`ScoreDeltaCurve`] calculation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScoreDeltaAttributes {
    /// The chart's internal level.
    pub internal_level: f64,
    /// The score that was rated.
    pub score: u32,
    /// The amount added onto the internal level.
    pub bonus: f64,
    /// The unrounded rating.
    pub rating: f64,
    /// The rank letter of the score.
    pub rank: ScoreRank,
}

impl ScoreDeltaAttributes {
    /// The rating cut off after `decimals` decimal places.
    pub fn truncated(&self, decimals: u32) -> f64 {
        self.rating.truncate(decimals)
    }
}
