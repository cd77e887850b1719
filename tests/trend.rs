use chart_trend::{
    model::{
        event::{ChartHistory, Event},
        version::{Region, Version},
    },
    trend::{Reduction, Trend, TrendLayout},
    GamePolicy, VersionCatalog,
};
use proptest::prelude::*;

use self::common::*;

mod common;

#[test]
fn short_history_is_unchanged() {
    let policy = GamePolicy::chunithm();
    let events = existence(&[(220, 12.0), (LUMINOUS_PLUS, 12.0), (VERSE, 12.5)]);

    // room for 5
    let timeline = policy.trend(TrendLayout::new(60.0, 300.0)).reduce(&events);

    assert_eq!(timeline.max_fit, 5);
    assert_eq!(timeline.reduction, Reduction::Unchanged);
    assert!(timeline.events().eq(events.iter()));
    assert!(timeline.pending_removal().is_none());
}

#[test]
fn outdated_history_gets_pending_removal() {
    let policy = GamePolicy::chunithm();

    let mut history = Vec::new();
    history.extend(existence(&[
        (100, 12.0),
        (105, 12.0),
        (110, 12.0),
        (115, 12.0),
        (120, 12.0),
        (125, 12.0),
    ]));
    history.extend(existence(&[(130, 12.5), (135, 12.5), (NEW, 12.5), (LUMINOUS_PLUS, 12.5)]));

    let timeline = policy
        .trend(TrendLayout::new(50.0, 230.0))
        .version_floor(VERSE)
        .reduce(&history);

    assert_eq!(timeline.max_fit, 4);
    assert_eq!(timeline.reduction, Reduction::ThinnedRepeats);
    assert_eq!(numeric(timeline.events()), [100, 130, NEW, VERSE]);

    let trends: Vec<_> = timeline.slots.iter().map(|slot| slot.trend).collect();
    assert_eq!(
        trends,
        [None, Some(Trend::Up), Some(Trend::Unchanged), Some(Trend::Removed)]
    );

    let pending = timeline.pending_removal().unwrap();
    assert!(pending.event.is_removal());
    assert_eq!(pending.event.version, jp(VERSE));

    // (230 - 4 * 50) / 3
    assert_eq_float(timeline.gap, 10.0);
    assert_eq_float(timeline.position_adjustment, 0.0);

    let xs: Vec<_> = timeline.slots.iter().map(|slot| slot.x).collect();
    assert_eq!(xs, [0.0, 60.0, 120.0, 180.0]);
}

#[test]
fn confirmed_removal_takes_last_slot() {
    let policy = GamePolicy::chunithm();

    let mut events = existence(&[
        (PARADISE, 11.0),
        (155, 11.0),
        (NEW, 11.0),
        (205, 11.0),
        (SUN, 11.0),
    ]);
    events.push(Event::removal(jp(215)));

    let timeline = policy.trend(TrendLayout::new(50.0, 160.0)).reduce(&events);

    assert_eq!(timeline.max_fit, 3);
    assert_eq!(numeric(timeline.events()), [PARADISE, 205, 215]);
    assert_eq!(timeline.slots[2].trend, Some(Trend::Removed));
    assert!(timeline.pending_removal().is_none());
}

#[test]
fn sparse_row_is_centered() {
    let policy = GamePolicy::maimai();
    let events = existence(&[(150, 13.7), (155, 13.8)]);

    let timeline = policy.trend(TrendLayout::new(40.0, 400.0)).reduce(&events);

    assert_eq!(timeline.len(), 2);
    assert_eq_float(timeline.gap, 80.0);
    assert_eq_float(timeline.position_adjustment, 120.0);
    assert_eq_float(timeline.slots[1].x, 240.0);
}

#[test]
fn regions_are_reduced_separately() {
    let policy = GamePolicy::chunithm();

    let history = ChartHistory::new(vec![
        Event::existence(jp(SUN), 13.5),
        Event::existence(Version::new(Region::China, 1, 0), 13.4),
        Event::existence(jp(215), 13.7),
        Event::existence(Version::new(Region::China, 1, 10), 13.4),
    ]);

    let reducer = policy.trend(TrendLayout::new(40.0, 400.0));

    let japan = reducer.reduce_history(&history, Region::Japan);
    assert_eq!(numeric(japan.events()), [SUN, 215, 220]);
    assert!(japan.pending_removal().is_some());

    // no version table for China, hence no current version to compare to
    let china = reducer.reduce_history(&history, Region::China);
    assert_eq!(numeric(china.events()), [100, 110]);
    assert!(china.pending_removal().is_none());

    let international = reducer.reduce_history(&history, Region::International);
    assert!(international.is_empty());
    assert_eq!(international.reduction, Reduction::Empty);
}

#[test]
fn too_narrow_for_anything() {
    let policy = GamePolicy::chunithm();
    let events = existence(&[(SUN, 13.5)]);

    let timeline = policy.trend(TrendLayout::new(40.0, 30.0)).reduce(&events);

    assert_eq!(timeline.max_fit, 0);
    assert!(timeline.is_empty());
}

/// Chronological Japanese histories with levels from a small pool so that
/// runs of repeated levels are common.
fn history_strategy() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec(prop::sample::select(vec![12.0, 12.5, 13.0]), 1..40).prop_map(|levels| {
        levels
            .into_iter()
            .enumerate()
            .map(|(i, level)| {
                let version = Version::new(Region::Japan, 1 + i as u32 / 20, (i as u32 % 20) * 5);

                Event::existence(version, level)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn never_exceeds_room(
        events in history_strategy(),
        max_fit in 1_usize..12,
        floor in 100_u32..300,
    ) {
        let catalog = VersionCatalog::chunithm();
        let layout = TrendLayout::new(10.0, max_fit as f64 * 10.0 + 5.0);

        let timeline = chart_trend::TrendReducer::new(&catalog, layout)
            .version_floor(floor)
            .reduce(&events);

        prop_assert_eq!(timeline.max_fit, max_fit);
        prop_assert!(timeline.len() <= max_fit);
        prop_assert!(timeline.gap <= layout.available_width / 5.0);
    }

    #[test]
    fn endpoints_survive(
        events in history_strategy(),
        max_fit in 2_usize..12,
    ) {
        let catalog = VersionCatalog::chunithm();
        let layout = TrendLayout::new(10.0, max_fit as f64 * 10.0);

        // floor of zero never appends a pending removal
        let timeline = chart_trend::TrendReducer::new(&catalog, layout)
            .version_floor(0)
            .reduce(&events);

        let displayed: Vec<_> = timeline.events().copied().collect();

        match timeline.reduction {
            Reduction::Unchanged => prop_assert_eq!(&displayed, &events),
            Reduction::TrimmedOldest | Reduction::ThinnedRepeats => {
                prop_assert_eq!(displayed.first(), events.first());
                prop_assert_eq!(displayed.last(), events.last());
            }
            Reduction::Exact => prop_assert_eq!(displayed.first(), events.first()),
            Reduction::Empty => prop_assert!(false, "non-empty history reduced to nothing"),
        }
    }
}
