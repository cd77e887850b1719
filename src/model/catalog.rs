use thiserror::Error;

use super::version::{Region, Version};

/// Minor increment assumed between consecutive releases that are not listed
/// in any [`VersionTable`].
pub const DEFAULT_MINOR_STEP: u32 = 5;

/// A named release within a [`VersionTable`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VersionEntry {
    pub name: String,
    pub major: u32,
    pub minor: u32,
}

/// Chronologically ordered list of a region's releases.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VersionTable {
    pub region: Region,
    /// Minor increment to assume past the newest listed release.
    #[cfg_attr(feature = "serde", serde(default = "default_minor_step"))]
    pub minor_step: u32,
    pub entries: Vec<VersionEntry>,
}

#[cfg(feature = "serde")]
const fn default_minor_step() -> u32 {
    DEFAULT_MINOR_STEP
}

impl VersionTable {
    /// Create an empty table.
    pub const fn new(region: Region, minor_step: u32) -> Self {
        Self {
            region,
            minor_step,
            entries: Vec::new(),
        }
    }

    /// Append a release. Releases must be added oldest first.
    #[must_use]
    pub fn entry(mut self, name: impl Into<String>, major: u32, minor: u32) -> Self {
        self.entries.push(VersionEntry {
            name: name.into(),
            major,
            minor,
        });

        self
    }

    fn version_at(&self, idx: usize) -> Option<Version> {
        self.entries
            .get(idx)
            .map(|entry| Version::new(self.region, entry.major, entry.minor))
    }

    /// Index of the entry matching `version`'s major and minor.
    pub fn position(&self, version: &Version) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| (entry.major, entry.minor) == version.major_minor())
    }

    /// The newest listed release.
    pub fn latest(&self) -> Option<Version> {
        self.entries.len().checked_sub(1).and_then(|idx| self.version_at(idx))
    }

    /// The release one step past `version`.
    ///
    /// Prefers the table successor, then the first listed release newer
    /// than `version`, and finally bumps the minor by [`minor_step`].
    ///
    /// [`minor_step`]: VersionTable::minor_step
    pub fn next(&self, version: &Version) -> Version {
        let successor = match self.position(version) {
            Some(idx) => self.version_at(idx + 1),
            None => self
                .entries
                .iter()
                .find(|entry| (entry.major, entry.minor) > version.major_minor())
                .map(|entry| Version::new(self.region, entry.major, entry.minor)),
        };

        successor.unwrap_or_else(|| step_minor(version, self.minor_step))
    }

    /// Ensure the entries are strictly ascending and the step is positive.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.minor_step == 0 {
            return Err(CatalogError::ZeroStep {
                region: self.region,
            });
        }

        let unordered = self
            .entries
            .windows(2)
            .find(|pair| (pair[0].major, pair[0].minor) >= (pair[1].major, pair[1].minor));

        match unordered {
            Some(pair) => Err(CatalogError::Unordered {
                region: self.region,
                name: pair[1].name.clone(),
            }),
            None => Ok(()),
        }
    }
}

fn step_minor(version: &Version, step: u32) -> Version {
    Version::new(version.region, version.major, version.minor + step)
}

/// Per-region [`VersionTable`]s of one game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VersionCatalog {
    tables: Vec<VersionTable>,
}

impl VersionCatalog {
    /// Create a catalog after validating each table.
    pub fn new(tables: Vec<VersionTable>) -> Result<Self, CatalogError> {
        let catalog = Self { tables };
        catalog.validate()?;

        Ok(catalog)
    }

    /// Check all tables and make sure no region appears twice.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (i, table) in self.tables.iter().enumerate() {
            table.validate()?;

            if self.tables[..i].iter().any(|prev| prev.region == table.region) {
                return Err(CatalogError::DuplicateRegion {
                    region: table.region,
                });
            }
        }

        Ok(())
    }

    pub fn tables(&self) -> &[VersionTable] {
        &self.tables
    }

    pub fn table(&self, region: Region) -> Option<&VersionTable> {
        self.tables.iter().find(|table| table.region == region)
    }

    /// The newest known release of `region`.
    pub fn latest(&self, region: Region) -> Option<Version> {
        self.table(region).and_then(VersionTable::latest)
    }

    /// The release one step past `version`, see [`VersionTable::next`].
    ///
    /// Regions without a table step by [`DEFAULT_MINOR_STEP`].
    pub fn next(&self, version: &Version) -> Version {
        match self.table(version.region) {
            Some(table) => table.next(version),
            None => step_minor(version, DEFAULT_MINOR_STEP),
        }
    }

    /// Display name of a listed release.
    pub fn name(&self, version: &Version) -> Option<&str> {
        let table = self.table(version.region)?;
        let idx = table.position(version)?;

        Some(table.entries[idx].name.as_str())
    }

    /// Japanese CHUNITHM releases up to VERSE.
    pub fn chunithm() -> Self {
        let japan = VersionTable::new(Region::Japan, DEFAULT_MINOR_STEP)
            .entry("CHUNITHM", 1, 0)
            .entry("CHUNITHM PLUS", 1, 5)
            .entry("AIR", 1, 10)
            .entry("AIR PLUS", 1, 15)
            .entry("STAR", 1, 20)
            .entry("STAR PLUS", 1, 25)
            .entry("AMAZON", 1, 30)
            .entry("AMAZON PLUS", 1, 35)
            .entry("CRYSTAL", 1, 40)
            .entry("CRYSTAL PLUS", 1, 45)
            .entry("PARADISE", 1, 50)
            .entry("PARADISE LOST", 1, 55)
            .entry("NEW", 2, 0)
            .entry("NEW PLUS", 2, 5)
            .entry("SUN", 2, 10)
            .entry("SUN PLUS", 2, 15)
            .entry("LUMINOUS", 2, 20)
            .entry("LUMINOUS PLUS", 2, 25)
            .entry("VERSE", 2, 30);

        Self {
            tables: vec![japan],
        }
    }

    /// Japanese maimai DX releases up to PRiSM PLUS.
    pub fn maimai() -> Self {
        let japan = VersionTable::new(Region::Japan, DEFAULT_MINOR_STEP)
            .entry("maimai DX", 1, 0)
            .entry("maimai DX PLUS", 1, 5)
            .entry("Splash", 1, 10)
            .entry("Splash PLUS", 1, 15)
            .entry("UNiVERSE", 1, 20)
            .entry("UNiVERSE PLUS", 1, 25)
            .entry("FESTiVAL", 1, 30)
            .entry("FESTiVAL PLUS", 1, 35)
            .entry("BUDDiES", 1, 40)
            .entry("BUDDiES PLUS", 1, 45)
            .entry("PRiSM", 1, 50)
            .entry("PRiSM PLUS", 1, 55);

        Self {
            tables: vec![japan],
        }
    }
}

/// Inconsistencies in a [`VersionCatalog`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("version table of {region:?} is not strictly ascending at `{name}`")]
    Unordered { region: Region, name: String },
    #[error("version table of {region:?} has a minor step of zero")]
    ZeroStep { region: Region },
    #[error("region {region:?} has more than one version table")]
    DuplicateRegion { region: Region },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jp(major: u32, minor: u32) -> Version {
        Version::new(Region::Japan, major, minor)
    }

    #[test]
    fn presets_are_valid() {
        assert_eq!(VersionCatalog::chunithm().validate(), Ok(()));
        assert_eq!(VersionCatalog::maimai().validate(), Ok(()));
    }

    #[test]
    fn next_follows_table() {
        let catalog = VersionCatalog::chunithm();

        assert_eq!(catalog.next(&jp(1, 55)), jp(2, 0));
        assert_eq!(catalog.next(&jp(2, 15).with_release(2)), jp(2, 20));
    }

    #[test]
    fn next_of_unlisted_version() {
        let catalog = VersionCatalog::chunithm();

        // between listed releases
        assert_eq!(catalog.next(&jp(2, 12)), jp(2, 15));
        // past the newest one
        assert_eq!(catalog.next(&jp(2, 30)), jp(2, 35));
        // region without table
        let intl = Version::new(Region::International, 2, 10);
        assert_eq!(catalog.next(&intl), Version::new(Region::International, 2, 15));
    }

    #[test]
    fn latest_and_name() {
        let catalog = VersionCatalog::maimai();

        assert_eq!(catalog.latest(Region::Japan), Some(jp(1, 55)));
        assert_eq!(catalog.latest(Region::China), None);
        assert_eq!(catalog.name(&jp(1, 40)), Some("BUDDiES"));
        assert_eq!(catalog.name(&jp(1, 41)), None);
    }

    #[test]
    fn rejects_unordered_table() {
        let table = VersionTable::new(Region::Japan, 5)
            .entry("A", 1, 0)
            .entry("C", 1, 10)
            .entry("B", 1, 5);

        assert_eq!(
            VersionCatalog::new(vec![table]),
            Err(CatalogError::Unordered {
                region: Region::Japan,
                name: "B".to_owned()
            })
        );
    }

    #[test]
    fn rejects_duplicate_region() {
        let a = VersionTable::new(Region::China, 5).entry("A", 1, 0);
        let b = VersionTable::new(Region::China, 5).entry("B", 1, 5);

        assert_eq!(
            VersionCatalog::new(vec![a, b]),
            Err(CatalogError::DuplicateRegion {
                region: Region::China
            })
        );
    }

    #[test]
    fn rejects_zero_step() {
        let table = VersionTable::new(Region::Japan, 0);

        assert_eq!(
            table.validate(),
            Err(CatalogError::ZeroStep {
                region: Region::Japan
            })
        );
    }
}
