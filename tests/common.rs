// False positive
#[allow(unused)]
pub use self::versions::*;

use chart_trend::model::{
    event::Event,
    version::{Region, Version},
};

/// Numeric versions used throughout the tests
mod versions {
    #![allow(unused)]

    pub const PARADISE: u32 = 150;
    pub const NEW: u32 = 200;
    pub const SUN: u32 = 210;
    pub const LUMINOUS_PLUS: u32 = 225;
    pub const VERSE: u32 = 230;
}

/// Tolerance for float comparisons; ratings are sums of a few decimals.
const TOLERANCE: f64 = 1e-9;

#[track_caller]
pub fn assert_eq_float(a: f64, b: f64) {
    assert!((a - b).abs() < TOLERANCE, "{a} != {b}")
}

/// A Japanese version from its numeric form, e.g. `215` for `2.15`.
#[allow(unused)]
pub const fn jp(numeric: u32) -> Version {
    Version::new(Region::Japan, numeric / 100, numeric % 100)
}

/// Existence events for `(numeric version, level)` pairs.
#[allow(unused)]
pub fn existence(history: &[(u32, f64)]) -> Vec<Event> {
    history
        .iter()
        .map(|&(version, level)| Event::existence(jp(version), level))
        .collect()
}

/// Numeric versions of the given events.
#[allow(unused)]
pub fn numeric<'a>(events: impl IntoIterator<Item = &'a Event>) -> Vec<u32> {
    events.into_iter().map(|e| e.version.numeric()).collect()
}
