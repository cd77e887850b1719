use crate::{
    model::catalog::{CatalogError, VersionCatalog},
    rating::{AchievementCurve, CurveError, RatingCurve, ScoreDeltaCurve},
    trend::{TrendLayout, TrendReducer},
};

/// Everything game-specific the rating engine and the history reducer need.
///
/// A policy pairs the game's [`RatingCurve`] with its per-region
/// [`VersionCatalog`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GamePolicy<C> {
    pub curve: C,
    pub catalog: VersionCatalog,
}

impl<C: RatingCurve> GamePolicy<C> {
    pub const fn new(curve: C, catalog: VersionCatalog) -> Self {
        Self { curve, catalog }
    }

    /// Rate a play, see [`RatingCurve::calculate`].
    pub fn rating(&self, internal_level: f64, score: C::Score) -> C::Output {
        self.curve.calculate(internal_level, score)
    }

    /// A history reducer using this game's version catalog.
    pub const fn trend(&self, layout: TrendLayout) -> TrendReducer<'_> {
        TrendReducer::new(&self.catalog, layout)
    }

    /// Check both the curve and the catalog.
    pub fn validate(&self) -> Result<(), PolicyError> {
        self.curve.validate()?;
        self.catalog.validate()?;

        Ok(())
    }
}

impl GamePolicy<ScoreDeltaCurve> {
    /// CHUNITHM rating table and Japanese releases.
    pub fn chunithm() -> Self {
        Self::new(ScoreDeltaCurve::chunithm(), VersionCatalog::chunithm())
    }
}

impl GamePolicy<AchievementCurve> {
    /// maimai DX rating table and Japanese releases.
    pub fn maimai() -> Self {
        Self::new(AchievementCurve::maimai(), VersionCatalog::maimai())
    }
}

/// A [`GamePolicy`] failed validation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PolicyError {
    #[error("invalid rating curve")]
    Curve(#[from] CurveError),
    #[error("invalid version catalog")]
    Catalog(#[from] CatalogError),
}

#[cfg(feature = "serde")]
pub use self::config::ConfigError;

#[cfg(feature = "serde")]
mod config {
    use serde::de::DeserializeOwned;

    use crate::{model::catalog::VersionCatalog, rating::RatingCurve};

    use super::{GamePolicy, PolicyError};

    /// Loading a policy from JSON failed.
    #[derive(Debug, thiserror::Error)]
    pub enum ConfigError {
        #[error("failed to deserialize config")]
        Json(#[from] serde_json::Error),
        #[error("config is inconsistent")]
        Policy(#[from] PolicyError),
    }

    fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, ConfigError> {
        serde_json::from_str(json).map_err(ConfigError::from)
    }

    impl VersionCatalog {
        /// Deserialize and validate a catalog.
        pub fn from_json(json: &str) -> Result<Self, ConfigError> {
            let catalog: Self = from_json(json)?;
            catalog.validate().map_err(PolicyError::from)?;

            Ok(catalog)
        }
    }

    impl<C: RatingCurve + DeserializeOwned> GamePolicy<C> {
        /// Deserialize and validate a policy.
        pub fn from_json(json: &str) -> Result<Self, ConfigError> {
            let policy: Self = from_json(json)?;
            policy.validate()?;

            Ok(policy)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{
        event::Event,
        version::{Region, Version},
    };

    use super::*;

    #[test]
    fn presets_validate() {
        assert_eq!(GamePolicy::chunithm().validate(), Ok(()));
        assert_eq!(GamePolicy::maimai().validate(), Ok(()));
    }

    #[test]
    fn same_reducer_for_both_games() {
        let layout = TrendLayout::new(40.0, 200.0);
        let chunithm = GamePolicy::chunithm();
        let maimai = GamePolicy::maimai();

        let events = [Event::existence(Version::new(Region::Japan, 1, 50), 13.0)];

        // both games list a successor of 1.50 and are past it
        let a = chunithm.trend(layout).reduce(&events);
        let b = maimai.trend(layout).reduce(&events);

        let next = Version::new(Region::Japan, 1, 55);
        assert_eq!(a.pending_removal().unwrap().event.version, next);
        assert_eq!(b.pending_removal().unwrap().event.version, next);
        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn rating_dispatches_to_curve() {
        let score = GamePolicy::chunithm().rating(13.0, 1_009_500);
        assert!((score.rating - 15.15).abs() < 1e-9);

        let achievement = GamePolicy::maimai().rating(13.2, 100.4123);
        assert_eq!(achievement.map(|attrs| attrs.rating), Ok(286));
    }
}
