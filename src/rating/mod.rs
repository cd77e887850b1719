use thiserror::Error;

pub use self::{
    achievement::{AchievementAttributes, AchievementCurve, AchievementTier},
    rank::{AchievementRank, ScoreRank},
    score_delta::{LevelTerm, ScoreBonus, ScoreBreakpoint, ScoreDeltaAttributes, ScoreDeltaCurve},
};

mod achievement;
mod rank;
mod score_delta;

/// A game's way of turning a play into a rating.
///
/// Implemented by [`ScoreDeltaCurve`] and [`AchievementCurve`].
pub trait RatingCurve {
    /// What a play is measured in, e.g. an integer score or a percentage.
    type Score: Copy;

    /// The result of a calculation.
    type Output;

    /// Rate a play on a chart of the given internal level.
    fn calculate(&self, internal_level: f64, score: Self::Score) -> Self::Output;

    /// Check the curve's tables for consistency.
    fn validate(&self) -> Result<(), CurveError>;
}

/// Inputs that a [`RatingCurve`] refuses to rate.
#[derive(Copy, Clone, Debug, Error, PartialEq)]
pub enum RatingError {
    #[error("achievement of {achievement}% is below the lowest rating tier")]
    BelowLowestTier { achievement: f64 },
}

/// Inconsistent [`RatingCurve`] tables.
#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
pub enum CurveError {
    #[error("rating curve has no rows")]
    Empty,
    #[error("row {index} of the rating curve is not below its predecessor")]
    Unordered { index: usize },
    #[error("row {index} of the rating curve has a step size of zero")]
    ZeroStep { index: usize },
    #[error("rating curve does not cover a score of zero")]
    Uncovered,
    #[error("rating curve cap must be finite")]
    InvalidCap,
}
