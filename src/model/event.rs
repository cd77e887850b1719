use super::version::{Region, Version};

/// What happened to a chart in a [`Version`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum EventKind {
    /// The chart is playable at the given internal level.
    Existence { level: f64 },
    /// The chart is not part of the version.
    Absence,
    /// The chart was removed starting with the version.
    Removal,
}

impl EventKind {
    /// Discriminant without the level so kinds can be hashed.
    pub(crate) const fn tag(&self) -> u8 {
        match self {
            Self::Existence { .. } => 0,
            Self::Absence => 1,
            Self::Removal => 2,
        }
    }
}

/// A historical fact about a chart in one regional release.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    pub version: Version,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub kind: EventKind,
}

impl Event {
    pub const fn existence(version: Version, level: f64) -> Self {
        Self {
            version,
            kind: EventKind::Existence { level },
        }
    }

    pub const fn absence(version: Version) -> Self {
        Self {
            version,
            kind: EventKind::Absence,
        }
    }

    pub const fn removal(version: Version) -> Self {
        Self {
            version,
            kind: EventKind::Removal,
        }
    }

    /// The internal level if this is an existence event.
    pub const fn level(&self) -> Option<f64> {
        match self.kind {
            EventKind::Existence { level } => Some(level),
            EventKind::Absence | EventKind::Removal => None,
        }
    }

    pub const fn is_existence(&self) -> bool {
        matches!(self.kind, EventKind::Existence { .. })
    }

    pub const fn is_removal(&self) -> bool {
        matches!(self.kind, EventKind::Removal)
    }

    pub const fn region(&self) -> Region {
        self.version.region
    }
}

/// Every [`Event`] of a chart across all regions.
///
/// Events of the same region are expected in chronological order; this is
/// not verified.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ChartHistory {
    events: Vec<Event>,
}

impl ChartHistory {
    pub const fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// The events of `region` in their original order.
    pub fn region(&self, region: Region) -> Vec<Event> {
        self.events
            .iter()
            .filter(|event| event.region() == region)
            .copied()
            .collect()
    }

    /// Regions with at least one event, in order of first appearance.
    pub fn regions(&self) -> Vec<Region> {
        let mut regions = Vec::new();

        for event in self.events.iter() {
            if !regions.contains(&event.region()) {
                regions.push(event.region());
            }
        }

        regions
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl From<Vec<Event>> for ChartHistory {
    fn from(events: Vec<Event>) -> Self {
        Self::new(events)
    }
}
