use std::{
    cmp::Ordering,
    fmt::{Display, Formatter, Result as FmtResult},
};

/// The market a game release belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Region {
    #[cfg_attr(feature = "serde", serde(rename = "jp"))]
    Japan,
    #[cfg_attr(feature = "serde", serde(rename = "intl"))]
    International,
    #[cfg_attr(feature = "serde", serde(rename = "cn"))]
    China,
}

/// A game release within a [`Region`].
///
/// Versions of the same region are ordered by `(major, minor, release)`
/// where a missing `release` comes before any sub-increment. Comparing
/// versions of different regions is meaningless, hence [`Version`] does not
/// implement [`Ord`]; use [`Version::cmp_release`] instead.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Version {
    pub region: Region,
    pub major: u32,
    pub minor: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub release: Option<u32>,
}

impl Version {
    pub const fn new(region: Region, major: u32, minor: u32) -> Self {
        Self {
            region,
            major,
            minor,
            release: None,
        }
    }

    /// Specify the release sub-increment.
    #[must_use]
    pub const fn with_release(mut self, release: u32) -> Self {
        self.release = Some(release);

        self
    }

    /// The numeric form `major * 100 + minor`, e.g. `215` for `2.15`.
    ///
    /// The release sub-increment is ignored so this doubles as the
    /// "version floor" a game's latest release is compared by.
    pub const fn numeric(&self) -> u32 {
        self.major * 100 + self.minor
    }

    /// Key to identify a release regardless of sub-increments.
    pub const fn major_minor(&self) -> (u32, u32) {
        (self.major, self.minor)
    }

    /// Chronological ordering within a region.
    pub fn cmp_release(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.release).cmp(&(other.major, other.minor, other.release))
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}.{:02}", self.major, self.minor)?;

        if let Some(release) = self.release {
            write!(f, ".{release:02}")?;
        }

        Ok(())
    }
}
