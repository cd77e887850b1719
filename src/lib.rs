//! Library to reduce rhythm-game chart histories into trend timelines and to
//! calculate play ratings.
//!
//! ## Description
//!
//! Score cards show a chart's difficulty history as a strip of version icons
//! next to the rating of a play. This crate provides the two pieces behind
//! that, independent of any drawing code:
//!
//! - [`TrendReducer`] turns the full version history of a chart in one
//!   region into a bounded, evenly spaced [`TrendTimeline`] that keeps the
//!   oldest and newest known state.
//! - [`RatingCurve`] implementations turn a raw score into a rating:
//!   [`ScoreDeltaCurve`] adds a score-dependent bonus onto the internal
//!   level, [`AchievementCurve`] multiplies the achievement with a tier
//!   constant.
//!
//! Both are parameterized through a [`GamePolicy`] which bundles a game's
//! rating curve with its per-region [`VersionCatalog`].
//!
//! ## Usage
//!
//! ```
//! use chart_trend::{
//!     model::{
//!         event::{ChartHistory, Event},
//!         version::{Region, Version},
//!     },
//!     trend::{Trend, TrendLayout},
//!     GamePolicy,
//! };
//!
//! let policy = GamePolicy::chunithm();
//!
//! // Rate a play
//! let attrs = policy.rating(14.1, 1_007_823);
//! assert_eq!(attrs.truncated(2), 16.13);
//!
//! // Reduce the chart's history
//! let v = |major, minor| Version::new(Region::Japan, major, minor);
//! let history = ChartHistory::new(vec![
//!     Event::existence(v(2, 10), 13.9),
//!     Event::existence(v(2, 15), 13.9),
//!     Event::existence(v(2, 20), 14.1),
//!     Event::existence(v(2, 25), 14.1),
//!     Event::existence(v(2, 30), 14.1),
//! ]);
//!
//! let timeline = policy
//!     .trend(TrendLayout::new(48.0, 320.0))
//!     .reduce_history(&history, Region::Japan);
//!
//! assert_eq!(timeline.len(), 5);
//! assert_eq!(timeline.slots[2].trend, Some(Trend::Up));
//! assert!(timeline.gap <= 320.0 / 5.0);
//! ```
//!
//! ## Features
//!
//! | Flag | Description | Dependencies
//! | - | - | -
//! | `default` | No features |
//! | `serde` | (De)serialization of events, version catalogs, rating curves, and policies, plus loading policies from JSON. | [`serde`], [`serde_json`]
//! | `tracing` | Reduction decisions and rejected rating inputs are logged through `tracing`. | [`tracing`]
//!
//! [`serde`]: https://docs.rs/serde
//! [`serde_json`]: https://docs.rs/serde_json
//! [`tracing`]: https://docs.rs/tracing

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::explicit_iter_loop,
    clippy::similar_names,
    clippy::cast_possible_wrap
)]

#[doc(inline)]
pub use self::{
    model::{catalog::VersionCatalog, event::ChartHistory},
    policy::{GamePolicy, PolicyError},
    rating::{AchievementCurve, RatingCurve, ScoreDeltaCurve},
    trend::{TrendReducer, TrendTimeline},
};

#[cfg(feature = "serde")]
#[doc(inline)]
pub use self::policy::ConfigError;

/// Versions, version catalogs, and chart history events.
pub mod model;

/// Rating curves and rank letters.
pub mod rating;

/// Chart history reduction and timeline layout.
pub mod trend;

mod policy;

mod util;
