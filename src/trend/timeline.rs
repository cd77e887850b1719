use crate::{
    model::event::Event,
    util::float_ext::FloatExt,
};

use super::reduce::Reduction;

/// Direction marker drawn next to a timeline icon.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Trend {
    /// The level went up compared to the previous icon.
    Up,
    /// The level went down compared to the previous icon.
    Down,
    /// Same level as the previous icon.
    Unchanged,
    /// The chart is (or is presumed to be) removed.
    Removed,
}

impl Trend {
    /// The marker of `event` when it follows `prev` on the timeline.
    pub fn between(prev: Option<&Event>, event: &Event) -> Option<Self> {
        if event.is_removal() {
            return Some(Self::Removed);
        }

        let prev = prev?.level()?;
        let curr = event.level()?;

        if curr.eq(prev) {
            Some(Self::Unchanged)
        } else if curr > prev {
            Some(Self::Up)
        } else {
            Some(Self::Down)
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Self::Up => '↑',
            Self::Down => '↓',
            Self::Unchanged => '→',
            Self::Removed => '×',
        }
    }
}

/// One icon of a [`TrendTimeline`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrendSlot {
    pub event: Event,
    /// Whether the event is a pending-removal marker rather than a fact
    /// from the chart database.
    pub synthetic: bool,
    /// Marker relative to the previous slot; `None` for the first slot.
    pub trend: Option<Trend>,
    /// Left edge of the icon.
    pub x: f64,
}

impl TrendSlot {
    pub const fn level(&self) -> Option<f64> {
        self.event.level()
    }
}

/// Display-ready version history of a chart in one region.
#[derive(Clone, Debug, PartialEq)]
pub struct TrendTimeline {
    pub slots: Vec<TrendSlot>,
    /// Distance between two consecutive icons.
    pub gap: f64,
    /// Offset of the first icon from the left edge.
    pub position_adjustment: f64,
    /// How many icons the layout had room for.
    pub max_fit: usize,
    /// The path the reduction took.
    pub reduction: Reduction,
}

impl TrendTimeline {
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The displayed events in order.
    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.slots.iter().map(|slot| &slot.event)
    }

    /// The last slot if it is a pending-removal marker.
    pub fn pending_removal(&self) -> Option<&TrendSlot> {
        self.slots.last().filter(|slot| slot.synthetic)
    }
}
