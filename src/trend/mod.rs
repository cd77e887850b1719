use crate::model::{
    catalog::VersionCatalog,
    event::{ChartHistory, Event},
    version::Region,
};

use self::reduce::reduce;

pub use self::{
    layout::{Spacing, TrendLayout},
    reduce::Reduction,
    timeline::{Trend, TrendSlot, TrendTimeline},
};

mod layout;
mod reduce;
mod timeline;

/// Reduces a chart's version history to a timeline that fits a
/// [`TrendLayout`].
///
/// The reduction keeps the oldest and newest known state of the chart and
/// prefers level changes over repeated levels. If the last known state is
/// older than the game's current version, a pending-removal marker one
/// release later is appended.
///
/// The current version is taken from the [`VersionCatalog`] unless
/// specified through [`TrendReducer::version_floor`].
///
/// # Example
///
/// ```
/// use chart_trend::{
///     model::{
///         catalog::VersionCatalog,
///         event::Event,
///         version::{Region, Version},
///     },
///     trend::{TrendLayout, TrendReducer},
/// };
///
/// let catalog = VersionCatalog::chunithm();
/// let v = |major, minor| Version::new(Region::Japan, major, minor);
///
/// let events = [
///     Event::existence(v(2, 0), 13.2),
///     Event::existence(v(2, 5), 13.2),
///     Event::existence(v(2, 10), 13.5),
/// ];
///
/// let timeline = TrendReducer::new(&catalog, TrendLayout::new(40.0, 400.0))
///     .reduce(&events);
///
/// // 2.10 predates VERSE (2.30) so a pending removal is appended at SUN PLUS
/// assert_eq!(timeline.len(), 4);
/// assert_eq!(timeline.pending_removal().unwrap().event.version, v(2, 15));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct TrendReducer<'a> {
    catalog: &'a VersionCatalog,
    layout: TrendLayout,
    version_floor: Option<u32>,
}

impl<'a> TrendReducer<'a> {
    pub const fn new(catalog: &'a VersionCatalog, layout: TrendLayout) -> Self {
        Self {
            catalog,
            layout,
            version_floor: None,
        }
    }

    /// Numeric form of the game's current version, e.g. `230` for `2.30`.
    ///
    /// Charts whose last event is older than this get a pending-removal
    /// marker. Applies to every region passed to this reducer.
    pub const fn version_floor(mut self, version_floor: u32) -> Self {
        self.version_floor = Some(version_floor);

        self
    }

    /// Reduce the chronological events of a single region.
    pub fn reduce(&self, events: &[Event]) -> TrendTimeline {
        let max_fit = self.layout.max_fit();

        let version_floor = self.version_floor.or_else(|| {
            let region = events.first()?.region();

            self.catalog.latest(region).map(|version| version.numeric())
        });

        let reduced = reduce(events, max_fit, version_floor, self.catalog);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            reduction = ?reduced.reduction,
            n_events = events.len(),
            n_displayed = reduced.events.len(),
            max_fit,
            "Reduced chart history"
        );

        let spacing = self.layout.spacing(reduced.events.len());
        let n_displayed = reduced.events.len();

        let slots = reduced
            .events
            .iter()
            .enumerate()
            .map(|(i, event)| TrendSlot {
                event: *event,
                synthetic: reduced.synthetic && i + 1 == n_displayed,
                trend: Trend::between(i.checked_sub(1).map(|j| &reduced.events[j]), event),
                x: spacing.x(i, self.layout.item_width),
            })
            .collect();

        TrendTimeline {
            slots,
            gap: spacing.gap,
            position_adjustment: spacing.position_adjustment,
            max_fit,
            reduction: reduced.reduction,
        }
    }

    /// Reduce the events of `region` within a chart's full history.
    ///
    /// Regions the chart never appeared in produce an empty timeline.
    pub fn reduce_history(&self, history: &ChartHistory, region: Region) -> TrendTimeline {
        self.reduce(&history.region(region))
    }
}
