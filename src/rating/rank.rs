use std::fmt::{Display, Formatter, Result as FmtResult};

/// Rank letter of a score-based play.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScoreRank {
    D,
    C,
    B,
    BB,
    BBB,
    A,
    AA,
    AAA,
    S,
    SPlus,
    SS,
    SSPlus,
    SSS,
    SSSPlus,
}

impl ScoreRank {
    /// Lowest score of each rank, best rank first.
    const THRESHOLDS: [(u32, Self); 13] = [
        (1_009_000, Self::SSSPlus),
        (1_007_500, Self::SSS),
        (1_005_000, Self::SSPlus),
        (1_000_000, Self::SS),
        (990_000, Self::SPlus),
        (975_000, Self::S),
        (950_000, Self::AAA),
        (925_000, Self::AA),
        (900_000, Self::A),
        (800_000, Self::BBB),
        (700_000, Self::BB),
        (600_000, Self::B),
        (500_000, Self::C),
    ];

    pub fn from_score(score: u32) -> Self {
        Self::THRESHOLDS
            .iter()
            .find(|(min, _)| score >= *min)
            .map_or(Self::D, |(_, rank)| *rank)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::D => "D",
            Self::C => "C",
            Self::B => "B",
            Self::BB => "BB",
            Self::BBB => "BBB",
            Self::A => "A",
            Self::AA => "AA",
            Self::AAA => "AAA",
            Self::S => "S",
            Self::SPlus => "S+",
            Self::SS => "SS",
            Self::SSPlus => "SS+",
            Self::SSS => "SSS",
            Self::SSSPlus => "SSS+",
        }
    }
}

impl Display for ScoreRank {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Rank letter of an achievement-based play.
///
/// Every row of an [`AchievementCurve`] carries one of these.
///
/// [`AchievementCurve`]: crate::rating::AchievementCurve
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AchievementRank {
    D,
    C,
    B,
    BB,
    BBB,
    A,
    AA,
    AAA,
    S,
    #[cfg_attr(feature = "serde", serde(rename = "S+"))]
    SPlus,
    SS,
    #[cfg_attr(feature = "serde", serde(rename = "SS+"))]
    SSPlus,
    SSS,
    #[cfg_attr(feature = "serde", serde(rename = "SSS+"))]
    SSSPlus,
}

impl AchievementRank {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::D => "D",
            Self::C => "C",
            Self::B => "B",
            Self::BB => "BB",
            Self::BBB => "BBB",
            Self::A => "A",
            Self::AA => "AA",
            Self::AAA => "AAA",
            Self::S => "S",
            Self::SPlus => "S+",
            Self::SS => "SS",
            Self::SSPlus => "SS+",
            Self::SSS => "SSS",
            Self::SSSPlus => "SSS+",
        }
    }
}

impl Display for AchievementRank {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
