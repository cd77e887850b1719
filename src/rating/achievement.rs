use std::cmp::Ordering;

use super::{rank::AchievementRank, CurveError, RatingCurve, RatingError};

/// Values this close below the next integer are floored up to it.
///
/// `21.6 * 10.0` and friends are not exact in binary floating point; without
/// the tolerance a rating of exactly 216 could come out as 215.
const FLOOR_TOLERANCE: f64 = 1e-9;

/// A row of an [`AchievementCurve`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AchievementTier {
    /// Lowest achievement in percent that reaches this tier.
    pub min_achievement: f64,
    /// Rating constant of the tier.
    pub constant: f64,
    pub rank: AchievementRank,
}

/// Rating curve multiplying the capped achievement with the internal level
/// and a per-tier constant.
///
/// `rating = floor(min(achievement, cap) / 100 * constant * level)`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AchievementCurve {
    /// Achievements above this value are rated as if they were equal to it.
    pub cap: f64,
    tiers: Vec<AchievementTier>,
}

impl AchievementCurve {
    /// Create a curve after validating its tiers.
    pub fn new(cap: f64, tiers: Vec<AchievementTier>) -> Result<Self, CurveError> {
        let curve = Self { cap, tiers };
        curve.validate()?;

        Ok(curve)
    }

    /// The maimai DX rating table.
    ///
    /// The rows from 50% to 80% all share the constant 13.6.
    pub fn maimai() -> Self {
        let tier = |min_achievement, constant, rank| AchievementTier {
            min_achievement,
            constant,
            rank,
        };

        Self {
            cap: 100.5,
            tiers: vec![
                tier(100.5, 22.4, AchievementRank::SSSPlus),
                tier(100.0, 21.6, AchievementRank::SSS),
                tier(99.5, 21.1, AchievementRank::SSPlus),
                tier(99.0, 20.8, AchievementRank::SS),
                tier(98.0, 20.3, AchievementRank::SPlus),
                tier(97.0, 20.0, AchievementRank::S),
                tier(94.0, 16.8, AchievementRank::AAA),
                tier(90.0, 15.2, AchievementRank::AA),
                tier(80.0, 13.6, AchievementRank::A),
                tier(75.0, 13.6, AchievementRank::BBB),
                tier(70.0, 13.6, AchievementRank::BB),
                tier(60.0, 13.6, AchievementRank::B),
                tier(50.0, 13.6, AchievementRank::C),
                tier(40.0, 6.4, AchievementRank::D),
                tier(30.0, 4.8, AchievementRank::D),
                tier(20.0, 3.2, AchievementRank::D),
                tier(10.0, 1.6, AchievementRank::D),
            ],
        }
    }

    pub fn tiers(&self) -> &[AchievementTier] {
        &self.tiers
    }

    /// Ensure there is at least one tier, tiers are strictly descending, and
    /// the cap is a finite number.
    pub fn validate(&self) -> Result<(), CurveError> {
        if self.tiers.is_empty() {
            return Err(CurveError::Empty);
        }

        if !self.cap.is_finite() {
            return Err(CurveError::InvalidCap);
        }

        // NaN thresholds count as unordered
        let unordered = self.tiers.windows(2).position(|pair| {
            pair[0]
                .min_achievement
                .partial_cmp(&pair[1].min_achievement)
                .map_or(true, Ordering::is_le)
        });

        match unordered {
            Some(index) => Err(CurveError::Unordered { index: index + 1 }),
            None => Ok(()),
        }
    }

    /// The tier `achievement` reaches, if any.
    pub fn tier(&self, achievement: f64) -> Option<&AchievementTier> {
        self.tiers
            .iter()
            .find(|tier| achievement >= tier.min_achievement)
    }

    /// Only the rating value, see [`RatingCurve::calculate`] for all
    /// attributes.
    pub fn rating(&self, internal_level: f64, achievement: f64) -> Result<u32, RatingError> {
        self.calculate(internal_level, achievement)
            .map(|attrs| attrs.rating)
    }
}

impl RatingCurve for AchievementCurve {
    type Score = f64;
    type Output = Result<AchievementAttributes, RatingError>;

    fn calculate(&self, internal_level: f64, achievement: f64) -> Self::Output {
        // `f64::min` would turn NaN into the cap
        let capped = if achievement.is_nan() {
            achievement
        } else {
            achievement.min(self.cap)
        };

        let Some(tier) = self.tier(capped) else {
            #[cfg(feature = "tracing")]
            tracing::warn!(achievement, "Achievement below the lowest rating tier");

            return Err(RatingError::BelowLowestTier { achievement });
        };

        let raw = capped / 100.0 * tier.constant * internal_level;

        Ok(AchievementAttributes {
            internal_level,
            achievement: capped,
            constant: tier.constant,
            rating: (raw + FLOOR_TOLERANCE).floor() as u32,
            rank: tier.rank,
        })
    }

    fn validate(&self) -> Result<(), CurveError> {
        AchievementCurve::validate(self)
    }
}

/// The result of an [`AchievementCurve`] calculation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AchievementAttributes {
    /// The chart's internal level.
    pub internal_level: f64,
    /// The achievement after applying the curve's cap.
    pub achievement: f64,
    /// The rating constant of the reached tier.
    pub constant: f64,
    /// The final, floored rating.
    pub rating: u32,
    /// The rank letter of the reached tier.
    pub rank: AchievementRank,
}
